pub mod aif;
pub mod error;

pub use crate::aif::{georgiou, parker, parker_conc, weinmann, Aif, AifError, ParkerParams};
pub use error::AifSolError;

pub mod prelude {
    pub mod models {
        pub use crate::aif::{georgiou, parker, weinmann};
    }

    pub use crate::aif::{Aif, AifError, ParkerParams};
    pub use crate::error::AifSolError;
}
