use serde::{Deserialize, Serialize};

/// Рубрики блога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Fashion,
    Beauty,
    StreetStyle,
    LifeStyle,
    Diy,
}

impl BlogCategory {
    /// Код рубрики, как он передаётся в адресной строке и в API
    pub fn code(&self) -> &'static str {
        match self {
            BlogCategory::Fashion => "fashion",
            BlogCategory::Beauty => "beauty",
            BlogCategory::StreetStyle => "streetstyle",
            BlogCategory::LifeStyle => "lifestyle",
            BlogCategory::Diy => "diy",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            BlogCategory::Fashion => "Fashion",
            BlogCategory::Beauty => "Beauty",
            BlogCategory::StreetStyle => "Street Style",
            BlogCategory::LifeStyle => "Life Style",
            BlogCategory::Diy => "DIY & Crafts",
        }
    }

    /// Все рубрики в порядке отображения в боковой панели
    pub fn all() -> Vec<BlogCategory> {
        vec![
            BlogCategory::Fashion,
            BlogCategory::Beauty,
            BlogCategory::StreetStyle,
            BlogCategory::LifeStyle,
            BlogCategory::Diy,
        ]
    }

    /// Парсинг из строки. Сравнение точное, регистр учитывается.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fashion" => Some(BlogCategory::Fashion),
            "beauty" => Some(BlogCategory::Beauty),
            "streetstyle" => Some(BlogCategory::StreetStyle),
            "lifestyle" => Some(BlogCategory::LifeStyle),
            "diy" => Some(BlogCategory::Diy),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
