//! SeaORM entity models
//!
//! Database entities for Readlist

mod article;

pub use article::{
    Entity as ArticleEntity,
    Model as Article,
    ActiveModel as ArticleActiveModel,
    Column as ArticleColumn,
    MAX_TITLE_LEN,
};
