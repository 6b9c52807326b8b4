pub mod get_order_rto;
pub mod order_summary_rto;
