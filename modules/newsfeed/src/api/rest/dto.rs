use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{NewsItem, NewsPatch};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItemDto {
    pub id: Uuid,
    pub title: String,
    pub shareable_link: String,
}

impl From<NewsItem> for NewsItemDto {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            shareable_link: item.shareable_link,
        }
    }
}

/// Administrative insert; the id is generated when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsReq {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub shareable_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsReq {
    pub title: Option<String>,
    pub shareable_link: Option<String>,
}

impl From<UpdateNewsReq> for NewsPatch {
    fn from(req: UpdateNewsReq) -> Self {
        Self {
            title: req.title,
            shareable_link: req.shareable_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResp {
    pub success: bool,
    pub news: NewsItemDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsListResp {
    pub success: bool,
    pub news: Vec<NewsItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResp {
    pub success: bool,
}
