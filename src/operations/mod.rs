pub mod foot;

pub use foot::{FootReport, MakeFoot};
