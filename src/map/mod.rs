pub mod canvas;
pub mod consts;
pub mod models;
