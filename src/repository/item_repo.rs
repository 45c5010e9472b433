// ==========================================
// 库存补货系统 - 物料数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑（指标不落库）
// 约束: 所有查询使用参数化
// ==========================================

use crate::domain::item::{Item, ItemDraft};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, sku, name,
        unit_cost, daily_demand, lead_time_days, current_stock,
        service_level, demand_std_dev,
        created_at, updated_at
    FROM items
"#;

// ==========================================
// ItemRepository - 物料仓储
// ==========================================
/// 物料仓储
/// 职责: 管理 items 表的 CRUD 与检索
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemRepository {
    /// 创建新的 ItemRepository 实例（独立连接）
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增物料
    ///
    /// # 返回
    /// - Ok(i64): 新记录ID
    pub fn insert(&self, draft: &ItemDraft) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO items (
                sku, name,
                unit_cost, daily_demand, lead_time_days, current_stock,
                service_level, demand_std_dev
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                draft.sku,
                draft.name,
                draft.unit_cost,
                draft.daily_demand,
                draft.lead_time_days,
                draft.current_stock,
                draft.service_level.as_code(),
                draft.demand_std_dev,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按主键查询
    ///
    /// # 返回
    /// - Ok(Some(Item)): 找到物料
    /// - Ok(None): 未找到
    /// - Err: 数据库错误
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Item>> {
        let conn = self.get_conn()?;
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let item = conn
            .query_row(&sql, params![id], map_item_row)
            .optional()?;
        Ok(item)
    }

    /// 判断物料是否存在
    pub fn exists(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found = conn
            .query_row("SELECT 1 FROM items WHERE id = ?1", params![id], |_row| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// 查询物料列表（可选关键字检索）
    ///
    /// # 参数
    /// - `query`: 关键字; 去首尾空白后转小写, 对 sku / name 做包含匹配; 空串等同不过滤
    ///
    /// # 排序
    /// updated_at DESC, id DESC（同秒更新时后建的在前）
    pub fn list(&self, query: Option<&str>) -> RepositoryResult<Vec<Item>> {
        let keyword = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let conn = self.get_conn()?;
        let items = match keyword {
            Some(keyword) => {
                let sql = format!(
                    "{} WHERE LOWER(sku) LIKE ?1 OR LOWER(name) LIKE ?1 ORDER BY updated_at DESC, id DESC",
                    SELECT_COLUMNS
                );
                let pattern = format!("%{}%", keyword);
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt
                    .query_map(params![pattern], map_item_row)?
                    .collect::<SqliteResult<Vec<_>>>()?;
                rows
            }
            None => {
                let sql = format!("{} ORDER BY updated_at DESC, id DESC", SELECT_COLUMNS);
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt
                    .query_map([], map_item_row)?
                    .collect::<SqliteResult<Vec<_>>>()?;
                rows
            }
        };

        Ok(items)
    }

    /// 更新物料（整体覆盖）
    ///
    /// # 返回
    /// - Ok(true): 已更新
    /// - Ok(false): 记录不存在
    pub fn update(&self, id: i64, draft: &ItemDraft) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE items SET
                sku = ?1, name = ?2,
                unit_cost = ?3, daily_demand = ?4, lead_time_days = ?5, current_stock = ?6,
                service_level = ?7, demand_std_dev = ?8,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?9
            "#,
            params![
                draft.sku,
                draft.name,
                draft.unit_cost,
                draft.daily_demand,
                draft.lead_time_days,
                draft.current_stock,
                draft.service_level.as_code(),
                draft.demand_std_dev,
                id,
            ],
        )?;
        Ok(affected > 0)
    }

    /// 删除物料
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 记录不存在
    pub fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// 物料总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count)
    }
}

// 行映射; 时间戳解析失败时置空而不是整行失败
fn map_item_row(row: &Row<'_>) -> SqliteResult<Item> {
    Ok(Item {
        id: row.get(0)?,
        sku: row.get(1)?,
        name: row.get(2)?,
        unit_cost: row.get(3)?,
        daily_demand: row.get(4)?,
        lead_time_days: row.get(5)?,
        current_stock: row.get(6)?,
        service_level: row.get(7)?,
        demand_std_dev: row.get(8)?,
        created_at: row.get(9).ok(),
        updated_at: row.get(10).ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ServiceLevel;

    fn setup() -> ItemRepository {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::init_schema(&conn).unwrap();
        ItemRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn draft(sku: &str, name: &str) -> ItemDraft {
        ItemDraft {
            sku: sku.to_string(),
            name: name.to_string(),
            unit_cost: 3.2,
            daily_demand: 10.0,
            lead_time_days: 5.0,
            current_stock: 80.0,
            service_level: ServiceLevel::P97,
            demand_std_dev: 1.5,
        }
    }

    #[test]
    fn test_insert_and_find() {
        let repo = setup();
        let id = repo.insert(&draft("A-100", "Widget")).unwrap();

        let item = repo.find_by_id(id).unwrap().expect("应能查到新建物料");
        assert_eq!(item.id, id);
        assert_eq!(item.sku, "A-100");
        assert_eq!(item.service_level, "0.97");
        assert_eq!(item.demand_std_dev, 1.5);
        assert!(item.created_at.is_some());

        assert!(repo.find_by_id(id + 100).unwrap().is_none());
        assert!(repo.exists(id).unwrap());
        assert!(!repo.exists(id + 100).unwrap());
    }

    #[test]
    fn test_list_search_case_insensitive() {
        let repo = setup();
        repo.insert(&draft("BOLT-M8", "Hex bolt")).unwrap();
        repo.insert(&draft("NUT-M8", "Hex nut")).unwrap();
        repo.insert(&draft("WASH-01", "Washer")).unwrap();

        assert_eq!(repo.list(None).unwrap().len(), 3);
        assert_eq!(repo.list(Some("   ")).unwrap().len(), 3);
        assert_eq!(repo.list(Some("hex")).unwrap().len(), 2);
        assert_eq!(repo.list(Some("  m8 ")).unwrap().len(), 2);
        assert_eq!(repo.list(Some("WASHER")).unwrap().len(), 1);
        assert!(repo.list(Some("gear")).unwrap().is_empty());
    }

    #[test]
    fn test_list_order_newest_first() {
        let repo = setup();
        let first = repo.insert(&draft("A", "first")).unwrap();
        let second = repo.insert(&draft("B", "second")).unwrap();

        let ids: Vec<i64> = repo.list(None).unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn test_update_and_delete() {
        let repo = setup();
        let id = repo.insert(&draft("A-1", "Old")).unwrap();

        let mut changed = draft("A-1", "New");
        changed.service_level = ServiceLevel::P90;
        changed.current_stock = 5.0;
        assert!(repo.update(id, &changed).unwrap());
        assert!(!repo.update(id + 1, &changed).unwrap());

        let item = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(item.name, "New");
        assert_eq!(item.service_level, "0.90");
        assert_eq!(item.current_stock, 5.0);

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
