use crate::error::{OrderError, OrderResult};
use crate::models::{CleanedOrder, MergeKey};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// 合并重复明细并重新编号
///
/// 同一合并键: 数量与总价累加，单价保留首次出现的值。
/// 映射只存活于本次调用; 输出按键首次出现的顺序，行号为 1..N。
pub fn merge_products(products: Vec<CleanedOrder>) -> OrderResult<Vec<CleanedOrder>> {
    let mut product_map: IndexMap<MergeKey, CleanedOrder> = IndexMap::with_capacity(products.len());

    for p in products {
        match product_map.entry(p.merge_key()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.quantity = existing
                    .quantity
                    .checked_add(p.quantity)
                    .ok_or_else(|| OrderError::QuantityOverflow {
                        product_id: p.product_id.clone(),
                    })?;
                existing.total_price += p.total_price;
            }
            Entry::Vacant(entry) => {
                entry.insert(p);
            }
        }
    }

    Ok(product_map
        .into_values()
        .zip(1..)
        .map(|(mut p, line_number)| {
            p.line_number = line_number;
            p
        })
        .collect())
}
