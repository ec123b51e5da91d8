use crate::error::{OrderError, OrderResult};
use crate::models::{ParsedProductId, ProductAttributes};
use bigdecimal::BigDecimal;

/// 只从左侧剥离的噪声字符
const NOISE_PREFIX: [char; 7] = ['-', '%', '2', '0', 'x', '3', '&'];
/// 平台导出时夹带的噪声片段，任意位置删除
const NOISE_TOKENS: [&str; 2] = ["%20x", "--"];
const BUNDLE_DELIMITER: char = '/';
const MULTIPLIER_MARKER: char = '*';
const SEGMENT_SEPARATOR: char = '-';

/// 拆解平台商品编码
///
/// 不会失败: 空串或纯噪声输入得到单个空串，由调用方处理。
pub fn parse_product_id(platform_product_id: &str) -> ParsedProductId {
    let mut cleaned = platform_product_id
        .trim_start_matches(&NOISE_PREFIX[..])
        .to_string();
    for token in NOISE_TOKENS {
        cleaned = cleaned.replace(token, "");
    }

    let product_ids: Vec<String> = cleaned
        .split(BUNDLE_DELIMITER)
        .map(str::to_string)
        .collect();

    // 单项倍数不超过 u32，求和不会溢出 i64
    let extra_multiplier_total = product_ids
        .iter()
        .map(|id| multiplier_of(id) - 1)
        .sum();

    ParsedProductId {
        product_count: product_ids.len() as i64,
        product_ids,
        extra_multiplier_total,
    }
}

/// 拆出尾部 `*N` 倍数
///
/// 编码中只能有一个 `*`，且其后为非负整数 (不超过 u32 范围)，
/// 否则视为没有倍数，编码原样返回。
pub fn split_multiplier(product_id: &str) -> (&str, Option<i64>) {
    let mut parts = product_id.split(MULTIPLIER_MARKER);
    let (Some(base), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
        if product_id.contains(MULTIPLIER_MARKER) {
            tracing::debug!("忽略含多个倍数标记的编码: {}", product_id);
        }
        return (product_id, None);
    };

    match parse_multiplier(suffix) {
        Some(n) => (base, Some(n)),
        None => {
            tracing::debug!("忽略无法解析的倍数后缀: {}", product_id);
            (product_id, None)
        }
    }
}

fn parse_multiplier(suffix: &str) -> Option<i64> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse::<u32>().ok().map(i64::from)
}

/// 没有有效倍数时按 1 件计
pub fn multiplier_of(product_id: &str) -> i64 {
    split_multiplier(product_id).1.unwrap_or(1)
}

/// 提取物料与型号: 前两段为物料，其余为型号
pub fn extract_attributes(product_id: &str) -> OrderResult<ProductAttributes> {
    let (base, _) = split_multiplier(product_id);
    let mut parts = base.splitn(3, SEGMENT_SEPARATOR);

    let (Some(maker), Some(texture)) = (parts.next(), parts.next()) else {
        return Err(OrderError::MalformedIdentifier {
            product_id: product_id.to_string(),
        });
    };
    if maker.is_empty() || texture.is_empty() {
        return Err(OrderError::MalformedIdentifier {
            product_id: product_id.to_string(),
        });
    }

    Ok(ProductAttributes {
        material_id: format!("{}{}{}", maker, SEGMENT_SEPARATOR, texture),
        model_id: parts.next().unwrap_or_default().to_string(),
    })
}

/// 单品按倍数换算后的数量与单价
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedLine {
    pub base_product_id: String,
    pub quantity: i64,
    /// 原样透传，拆价在上层完成
    pub unit_price: BigDecimal,
}

pub fn apply_multiplier(product_id: &str, quantity: i64, unit_price: &BigDecimal) -> OrderResult<AdjustedLine> {
    let (base, multiplier) = split_multiplier(product_id);
    let quantity = quantity
        .checked_mul(multiplier.unwrap_or(1))
        .ok_or_else(|| OrderError::QuantityOverflow {
            product_id: product_id.to_string(),
        })?;

    Ok(AdjustedLine {
        base_product_id: base.to_string(),
        quantity,
        unit_price: unit_price.clone(),
    })
}
