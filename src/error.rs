//! 订单清洗过程中的错误类型
//!
//! 倍数后缀解析失败、未知材质都在原地吸收，不会出现在这里。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// 单品编码少于 `物料-材质` 两段
    #[error("malformed product identifier '{product_id}': expected MATERIAL-TEXTURE[-MODEL]")]
    MalformedIdentifier { product_id: String },

    /// 数量换算超出 i64
    #[error("quantity overflow while expanding '{product_id}'")]
    QuantityOverflow { product_id: String },

    /// 全部单品倍数为 0，无法拆价
    #[error("product identifier '{platform_product_id}' resolves to zero physical units")]
    ZeroUnitCount { platform_product_id: String },

    /// 附带出错订单行号
    #[error("order line {line_number}: {source}")]
    InvalidLine {
        line_number: i64,
        #[source]
        source: Box<OrderError>,
    },
}

impl OrderError {
    pub fn at_line(self, line_number: i64) -> Self {
        OrderError::InvalidLine {
            line_number,
            source: Box::new(self),
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_context_is_part_of_message() {
        let err = OrderError::MalformedIdentifier {
            product_id: "FG0A".into(),
        }
        .at_line(4);
        let msg = err.to_string();
        assert!(msg.contains("order line 4"));
        assert!(msg.contains("'FG0A'"));
    }

    #[test]
    fn overflow_names_the_product() {
        let err = OrderError::QuantityOverflow {
            product_id: "FG0A-CLEAR-X*2".into(),
        };
        assert!(err.to_string().contains("FG0A-CLEAR-X*2"));
    }
}
