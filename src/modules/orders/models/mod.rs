mod order;
mod order_line;

pub use order::Order;
pub use order_line::OrderLine;
