//! 商品仓储接口

use shop_ports::Repository;

use super::{Product, ProductId};

/// 商品仓储，CRUD 能力全部继承自 `Repository`
pub trait ProductRepository: Repository<Product, ProductId> {}
