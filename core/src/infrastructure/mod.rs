pub mod ewg;
