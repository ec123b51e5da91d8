use crate::error::{OrderError, OrderResult};
use crate::models::{CleanedOrder, InputOrder};
use crate::service::complementary::{cleaner_items, wiping_cloth};
use crate::service::merge::merge_products;
use crate::service::parser::{apply_multiplier, extract_attributes, parse_product_id};
use bigdecimal::BigDecimal;

/// 批量清洗订单
///
/// 逐行拆解、拆价、追加赠品，最后整批合并重编号。
/// 任一行编码非法则整批失败，不返回部分结果。
pub fn process_orders(input_orders: &[InputOrder]) -> OrderResult<Vec<CleanedOrder>> {
    tracing::info!("开始清洗订单: {} 行", input_orders.len());

    let mut cleaned_orders: Vec<CleanedOrder> = Vec::new();
    let mut order_no = 1;

    for input_order in input_orders {
        process_order(input_order, &mut order_no, &mut cleaned_orders)
            .map_err(|e| e.at_line(input_order.line_number))?;
    }

    let generated = cleaned_orders.len();
    let merged = merge_products(cleaned_orders)?;
    tracing::info!("清洗完成: 生成 {} 条明细, 合并后 {} 条", generated, merged.len());

    Ok(merged)
}

/// 处理单行订单，明细追加到 `cleaned_orders`，`order_no` 为临时行号
fn process_order(
    input_order: &InputOrder,
    order_no: &mut i64,
    cleaned_orders: &mut Vec<CleanedOrder>,
) -> OrderResult<()> {
    let parsed = parse_product_id(&input_order.platform_product_id);
    if parsed.unit_count() <= 0 {
        tracing::warn!("订单行 {} 实物件数为 0, 无法拆价", input_order.line_number);
        return Err(OrderError::ZeroUnitCount {
            platform_product_id: input_order.platform_product_id.clone(),
        });
    }
    let divisor = BigDecimal::from(parsed.unit_count());

    tracing::debug!(
        "订单行 {} 拆解为 {} 个单品, 额外倍数 {}",
        input_order.line_number,
        parsed.product_count,
        parsed.extra_multiplier_total
    );

    for product_id in &parsed.product_ids {
        let attributes = extract_attributes(product_id).map_err(|e| {
            tracing::warn!("订单行 {} 编码非法: {}", input_order.line_number, e);
            e
        })?;
        let adjusted = apply_multiplier(product_id, input_order.quantity, &input_order.unit_price)?;

        let total_price = &adjusted.unit_price * &BigDecimal::from(adjusted.quantity);
        cleaned_orders.push(CleanedOrder {
            line_number: *order_no,
            product_id: adjusted.base_product_id,
            material_id: attributes.material_id,
            model_id: attributes.model_id,
            quantity: adjusted.quantity,
            unit_price: &adjusted.unit_price / &divisor,
            total_price: &total_price / &divisor,
        });
        *order_no += 1;
    }

    cleaned_orders.push(wiping_cloth(&parsed, input_order.quantity, *order_no)?);
    *order_no += 1;

    let cleaners = cleaner_items(&parsed.product_ids, input_order.quantity, *order_no)?;
    *order_no += cleaners.len() as i64;
    cleaned_orders.extend(cleaners);

    Ok(())
}
