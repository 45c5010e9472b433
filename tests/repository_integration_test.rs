// ==========================================
// Repository 集成测试
// ==========================================
// 测试范围:
// 1. 文件库上的 CRUD 与持久化
// 2. 多个仓储实例共享同一文件
// 3. schema 初始化幂等
// ==========================================

mod helpers;

use helpers::test_data_builder::ItemBuilder;
use inventory_reorder::db;
use inventory_reorder::repository::ItemRepository;

#[test]
fn test_item_repository_crud() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let repo = ItemRepository::new(&db_path).unwrap();

    let draft = ItemBuilder::new("CRUD-1")
        .name("Crud item")
        .unit_cost(4.5)
        .service_level("0.97")
        .demand_std_dev(1.5)
        .to_draft();
    let id = repo.insert(&draft).unwrap();

    let item = repo.find_by_id(id).unwrap().expect("物料应存在");
    assert_eq!(item.sku, "CRUD-1");
    assert_eq!(item.unit_cost, 4.5);
    assert_eq!(item.service_level, "0.97");
    assert_eq!(item.demand_std_dev, 1.5);
    assert!(item.created_at.is_some());
    assert!(item.updated_at.is_some());

    let changed = ItemBuilder::new("CRUD-1").name("Changed").to_draft();
    assert!(repo.update(id, &changed).unwrap());
    let item = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(item.name, "Changed");
    assert_eq!(item.service_level, "0.95");

    assert!(repo.delete(id).unwrap());
    assert!(!repo.exists(id).unwrap());
    assert!(!repo.update(id, &changed).unwrap());
    assert!(!repo.delete(id).unwrap());
}

#[test]
fn test_item_repository_persists_across_instances() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();

    let id = {
        let writer = ItemRepository::new(&db_path).unwrap();
        writer.insert(&ItemBuilder::new("PERSIST").to_draft()).unwrap()
    };

    let reader = ItemRepository::new(&db_path).unwrap();
    assert!(reader.exists(id).unwrap());
    assert_eq!(reader.count().unwrap(), 1);
    assert_eq!(reader.list(Some("persist")).unwrap().len(), 1);
}

#[test]
fn test_init_schema_idempotent() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let conn = db::open_sqlite_connection(&db_path).unwrap();

    db::init_schema(&conn).unwrap();
    db::init_schema(&conn).unwrap();

    assert_eq!(
        db::read_schema_version(&conn).unwrap(),
        Some(db::CURRENT_SCHEMA_VERSION)
    );
}

#[test]
fn test_list_query_is_parameterized() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let repo = ItemRepository::new(&db_path).unwrap();
    repo.insert(&ItemBuilder::new("SAFE").to_draft()).unwrap();

    assert!(repo.list(Some("' OR 1=1 --")).unwrap().is_empty());
    assert_eq!(repo.count().unwrap(), 1);
}
