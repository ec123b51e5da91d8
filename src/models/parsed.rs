/// 平台商品编码拆解结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProductId {
    /// 单品编码，仍保留 `*N` 后缀
    pub product_ids: Vec<String>,
    pub product_count: i64,
    /// 所有 `*N` 的 (N - 1) 之和
    pub extra_multiplier_total: i64,
}

impl ParsedProductId {
    /// 一件原始商品对应的实物件数，也是拆价除数
    pub fn unit_count(&self) -> i64 {
        self.product_count + self.extra_multiplier_total
    }
}

/// 单品编码拆出的物料与型号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributes {
    pub material_id: String,
    pub model_id: String,
}
