pub mod doctor;
pub mod enums;
pub mod filters;
pub mod invoice;
pub mod patient;
pub mod prescription;
pub mod settings;

pub use doctor::*;
pub use filters::*;
pub use invoice::*;
pub use patient::*;
pub use prescription::*;
pub use settings::*;
