use crate::models::CleanedOrder;
use bigdecimal::BigDecimal;
use std::io::Write;

/// CSV 中价格保留两位小数
const PRICE_SCALE: i64 = 2;

const HEADER: [&str; 7] = [
    "lineNumber",
    "productId",
    "materialId",
    "modelId",
    "quantity",
    "unitPrice",
    "totalPrice",
];

/// 导出清洗结果为 CSV (带表头)
pub fn write_csv<W: Write>(items: &[CleanedOrder], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    for item in items {
        writer.write_record(&[
            item.line_number.to_string(),
            item.product_id.clone(),
            item.material_id.clone(),
            item.model_id.clone(),
            item.quantity.to_string(),
            format_price(&item.unit_price),
            format_price(&item.total_price),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_price(price: &BigDecimal) -> String {
    price.round(PRICE_SCALE).to_string()
}

pub fn to_csv_string(items: &[CleanedOrder]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(items, &mut buf)?;
    // csv 只写入 UTF-8 字段
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
