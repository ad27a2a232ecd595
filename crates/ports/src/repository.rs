//! Repository trait 定义

use async_trait::async_trait;
use shop_errors::AppResult;

/// 通用 CRUD Repository
///
/// 各聚合的仓储接口只需继承该 trait，不再声明额外方法：
///
/// ```ignore
/// pub trait ProductRepository: Repository<Product, ProductId> {}
/// ```
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// 查询全部，按创建时间升序
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// 保存实体（不存在则插入，存在则更新）
    async fn save(&self, entity: &T) -> AppResult<()>;

    /// 删除实体，不存在时返回 NotFound
    async fn delete(&self, id: &ID) -> AppResult<()>;

    /// 检查是否存在
    async fn exists(&self, id: &ID) -> AppResult<bool>;

    /// 统计总数
    async fn count(&self) -> AppResult<u64>;
}
