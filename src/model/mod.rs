pub mod fichaje;
