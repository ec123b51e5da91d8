use crate::error::{OrderError, OrderResult};
use crate::models::{CleanedOrder, ParsedProductId, Texture};
use crate::service::parser::split_multiplier;
use std::collections::BTreeMap;

pub const WIPING_CLOTH_ID: &str = "WIPING-CLOTH";
/// 至少 物料-材质-型号 三段才赠送清洁剂
const MIN_CLEANER_SEGMENTS: usize = 3;

/// 擦拭布: 单品数 × 订单数量，再加上 `*N` 带来的额外件数
pub fn wiping_cloth(parsed: &ParsedProductId, quantity: i64, line_number: i64) -> OrderResult<CleanedOrder> {
    let cloth_quantity = parsed
        .product_count
        .checked_mul(quantity)
        .and_then(|q| q.checked_add(parsed.extra_multiplier_total))
        .ok_or_else(|| OrderError::QuantityOverflow {
            product_id: WIPING_CLOTH_ID.to_string(),
        })?;

    Ok(CleanedOrder::complementary(line_number, WIPING_CLOTH_ID, cloth_quantity))
}

/// 清洁剂: 每种材质一行，数量为该材质的件数 × 订单数量
///
/// 行号从 `first_line_number` 起依次递增，按 CLEAR / MATTE / PRIVACY 顺序输出。
pub fn cleaner_items(
    product_ids: &[String],
    quantity: i64,
    first_line_number: i64,
) -> OrderResult<Vec<CleanedOrder>> {
    let mut units_by_texture: BTreeMap<Texture, i64> = BTreeMap::new();

    for product_id in product_ids {
        let (base_id, multiplier) = split_multiplier(product_id);
        if base_id.split('-').count() < MIN_CLEANER_SEGMENTS {
            tracing::debug!("编码缺少型号段，不赠送清洁剂: {}", base_id);
            continue;
        }
        let Some(texture) = Texture::classify(base_id) else {
            tracing::debug!("未识别材质，不赠送清洁剂: {}", base_id);
            continue;
        };
        let units = units_by_texture.entry(texture).or_insert(0);
        *units = units
            .checked_add(multiplier.unwrap_or(1))
            .ok_or_else(|| OrderError::QuantityOverflow {
                product_id: texture.cleaner_product_id(),
            })?;
    }

    units_by_texture
        .into_iter()
        .zip(first_line_number..)
        .map(|((texture, units), line_number)| {
            let product_id = texture.cleaner_product_id();
            match units.checked_mul(quantity) {
                Some(q) => Ok(CleanedOrder::complementary(line_number, product_id, q)),
                None => Err(OrderError::QuantityOverflow { product_id }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::parser::parse_product_id;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cloth_counts_every_physical_unit() {
        let parsed = parse_product_id("--FG0A-CLEAR-OPPOA3*2/FG0A-MATTE-OPPOA3");
        let cloth = wiping_cloth(&parsed, 1, 9).unwrap();
        assert_eq!(cloth.product_id, WIPING_CLOTH_ID);
        assert_eq!(cloth.quantity, 3);
        assert_eq!(cloth.line_number, 9);
    }

    #[test]
    fn cloth_scales_with_order_quantity() {
        let parsed = parse_product_id("FG0A-CLEAR-IPHONE16PROMAX");
        assert_eq!(wiping_cloth(&parsed, 2, 1).unwrap().quantity, 2);
    }

    #[test]
    fn cloth_adds_extra_units_once_per_line() {
        let parsed = parse_product_id("FG0A-CLEAR-X*2");
        assert_eq!(wiping_cloth(&parsed, 3, 1).unwrap().quantity, 4);
    }

    #[test]
    fn cloth_overflow_is_an_error() {
        let parsed = parse_product_id("FG0A-CLEAR-X/FG0A-MATTE-X");
        let err = wiping_cloth(&parsed, i64::MAX, 1).unwrap_err();
        assert!(matches!(err, OrderError::QuantityOverflow { .. }));
    }

    #[test]
    fn cleaners_grouped_by_texture() {
        let items = cleaner_items(
            &ids(&["FG0A-MATTE-OPPOA3", "FG0A-CLEAR-OPPOA3*2", "FG0A-CLEAR-OPPOA3-B"]),
            1,
            5,
        )
        .unwrap();
        let summary: Vec<(&str, i64, i64)> = items
            .iter()
            .map(|i| (i.product_id.as_str(), i.quantity, i.line_number))
            .collect();
        assert_eq!(
            summary,
            vec![("CLEAR-CLEANNER", 3, 5), ("MATTE-CLEANNER", 1, 6)]
        );
    }

    #[test]
    fn cleaner_quantity_scales_with_order_quantity() {
        let items = cleaner_items(&ids(&["FG0A-PRIVACY-IPHONE16*2"]), 3, 1).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, "PRIVACY-CLEANNER");
        assert_eq!(items[0].quantity, 6);
    }

    #[test]
    fn unknown_texture_is_skipped() {
        let items = cleaner_items(&ids(&["FG0A-GLOSS-OPPOA3", ""]), 1, 1).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn identifier_without_model_gets_no_cleaner() {
        let items = cleaner_items(&ids(&["FG0A-CLEAR", "FG0A-MATTE*2"]), 1, 1).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn zero_multiplier_still_lists_its_cleaner() {
        let items = cleaner_items(&ids(&["FG0A-CLEAR-OPPOA3*0"]), 1, 1).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 0);
    }

    #[test]
    fn cleaner_overflow_is_an_error() {
        let err = cleaner_items(&ids(&["FG0A-CLEAR-OPPOA3*2"]), i64::MAX, 1).unwrap_err();
        assert!(matches!(err, OrderError::QuantityOverflow { .. }));
    }
}
