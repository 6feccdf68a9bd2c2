// Input Module
//
// Text formats for getting matrices into the library.

pub mod mtx;

pub use mtx::parse_matrix_market;
