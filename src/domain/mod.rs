pub mod numeric;
pub mod weather;
pub mod window;
