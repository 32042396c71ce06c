pub mod batch;
pub mod decode;
pub mod encode;
pub mod recover;
pub mod shorten;
pub mod validate;
