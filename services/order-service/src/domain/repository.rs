//! 订单仓储接口

use shop_ports::Repository;

use super::{Order, OrderId};

/// 订单仓储，CRUD 能力全部继承自 `Repository`
pub trait OrderRepository: Repository<Order, OrderId> {}
