pub mod created_rto;
pub mod success_rto;
