/// 膜面材质，决定赠送哪种清洁剂
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Texture {
    Clear,
    Matte,
    Privacy,
}

impl Texture {
    /// 按此顺序匹配，先命中者优先
    pub const ALL: [Texture; 3] = [Texture::Clear, Texture::Matte, Texture::Privacy];

    pub fn keyword(self) -> &'static str {
        match self {
            Texture::Clear => "CLEAR",
            Texture::Matte => "MATTE",
            Texture::Privacy => "PRIVACY",
        }
    }

    pub fn cleaner_product_id(self) -> String {
        format!("{}-CLEANNER", self.keyword())
    }

    /// 子串匹配，区分大小写
    pub fn classify(product_id: &str) -> Option<Texture> {
        Self::ALL
            .into_iter()
            .find(|texture| product_id.contains(texture.keyword()))
    }
}
