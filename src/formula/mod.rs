pub mod formula;
pub mod io;
