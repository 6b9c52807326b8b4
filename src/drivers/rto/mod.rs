pub mod get_driver_rto;
