pub mod lineq;
