use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};

/// 平台导出的原始订单行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOrder {
    #[serde(alias = "no")]
    pub line_number: i64,
    pub platform_product_id: String,
    #[serde(alias = "qty")]
    pub quantity: i64,
    pub unit_price: BigDecimal,
    /// 仅随输入携带，不参与计算
    #[serde(default)]
    pub total_price: BigDecimal,
}

/// 清洗后的订单明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedOrder {
    pub line_number: i64,
    pub product_id: String,
    pub material_id: String,
    pub model_id: String,
    pub quantity: i64,
    #[serde(serialize_with = "decimal_as_number")]
    pub unit_price: BigDecimal,
    #[serde(serialize_with = "decimal_as_number")]
    pub total_price: BigDecimal,
}

impl CleanedOrder {
    /// 赠品行 (擦拭布 / 清洁剂): 无物料、无型号、零价格
    pub fn complementary(line_number: i64, product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            line_number,
            product_id: product_id.into(),
            material_id: String::new(),
            model_id: String::new(),
            quantity,
            unit_price: BigDecimal::zero(),
            total_price: BigDecimal::zero(),
        }
    }

    pub fn merge_key(&self) -> MergeKey {
        MergeKey {
            product_id: self.product_id.clone(),
            material_id: self.material_id.clone(),
            model_id: self.model_id.clone(),
        }
    }
}

/// 合并键: (商品, 物料, 型号) 相同即同一商品
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub product_id: String,
    pub material_id: String,
    pub model_id: String,
}

/// 价格在线上以 JSON 数字输出
fn decimal_as_number<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_f64() {
        Some(v) => serializer.serialize_f64(v),
        None => Err(S::Error::custom(format!("price {} is not representable", value))),
    }
}
