// ==========================================
// CSV 导出集成测试
// ==========================================
// 测试范围:
// 1. 行数 = 物料数 + 1
// 2. 指标列与引擎计算一致
// 3. 特殊字符转义可被标准 CSV 解析器还原
// ==========================================

mod helpers;

use helpers::api_test_helper::ApiTestEnv;
use helpers::test_data_builder::ItemBuilder;
use inventory_reorder::engine::ReorderMetricsEngine;
use inventory_reorder::exporter::EXPORT_HEADERS;

fn parse(csv_text: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader
        .headers()
        .expect("表头解析失败")
        .iter()
        .map(|h| h.to_string())
        .collect();
    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("记录解析失败");
    (headers, records)
}

#[test]
fn test_export_行数与表头() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.create_all(&[
        ItemBuilder::new("A"),
        ItemBuilder::new("B"),
        ItemBuilder::new("C"),
    ])
    .unwrap();

    let text = env.item_api.export_csv().unwrap();
    assert_eq!(text.lines().count(), 4);

    let (headers, records) = parse(&text);
    assert_eq!(headers, EXPORT_HEADERS.to_vec());
    assert_eq!(records.len(), 3);
}

#[test]
fn test_export_指标列与引擎一致() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.create_all(&[
        ItemBuilder::new("SIGMA")
            .unit_cost(2.5)
            .daily_demand(12.0)
            .lead_time_days(7.0)
            .current_stock(30.0)
            .service_level("0.99")
            .demand_std_dev(4.0),
        ItemBuilder::new("FLAT").daily_demand(0.0).current_stock(8.0),
    ])
    .unwrap();

    let engine = ReorderMetricsEngine::new();
    let items = env.item_repo.list(None).unwrap();
    let (_, records) = parse(&env.item_api.export_csv().unwrap());
    assert_eq!(records.len(), items.len());

    for (item, record) in items.iter().zip(records.iter()) {
        let metrics = engine.compute_item(item);
        assert_eq!(record[0].parse::<i64>().unwrap(), item.id);
        assert_eq!(&record[1], item.sku.as_str());
        assert_eq!(record[9].parse::<f64>().unwrap(), metrics.safety_stock);
        assert_eq!(record[10].parse::<f64>().unwrap(), metrics.reorder_point);
        assert_eq!(record[11].parse::<f64>().unwrap(), metrics.days_of_stock);
        assert_eq!(record[12].parse::<f64>().unwrap(), metrics.annual_usage_value);
    }
}

#[test]
fn test_export_特殊字符转义() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let name = "Pipe 1/2\", \"copper\"\nsecond line";
    env.create(&ItemBuilder::new("P,1").name(name)).unwrap();

    let (_, records) = parse(&env.item_api.export_csv().unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][1], "P,1");
    assert_eq!(&records[0][2], name);
}
