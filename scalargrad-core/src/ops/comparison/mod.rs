pub mod equal;
