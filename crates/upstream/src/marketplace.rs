//! Marketplace product catalog client.
//!
//! List calls degrade to a static per-category sample set whenever the
//! upstream fails, so the storefront's product rail keeps rendering; the
//! single-product lookup surfaces failures instead.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::UpstreamError;

pub const DEFAULT_BASE_URL: &str =
    "https://api-gateway.coupang.com/v2/providers/seller_api/apis/api/v1/marketplace/seller-products";

const SAMPLE_LINK: &str = "https://www.coupang.com";

/// A marketplace record mapped to the storefront product shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketItem {
    /// Passed through as-is; the upstream mixes string and numeric ids.
    pub id: Value,
    pub name: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub brand: String,
    pub category: String,
    pub rating: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketPage {
    pub items: Vec<MarketItem>,
    pub total: i64,
}

#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl MarketplaceClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Single product lookup by seller product id.
    pub async fn product(&self, seller_product_id: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, seller_product_id);
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header("X-Requested-By", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        Ok(resp.json().await?)
    }

    /// List products, optionally narrowed to a storefront category.
    pub async fn list(
        &self,
        category: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<MarketPage, UpstreamError> {
        let mut req = self
            .http
            .get(&self.base_url)
            .query(&[("page", page), ("limit", limit)]);
        if let Some(c) = category {
            req = req.query(&[("categoryId", category_code(c))]);
        }

        let resp = req
            .bearer_auth(&self.access_token)
            .header("X-Requested-By", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let payload: Value = resp.json().await?;
        let raw = payload
            .pointer("/data/content")
            .or_else(|| payload.get("data"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let fallback_category = category.unwrap_or("supplies");
        let items: Vec<MarketItem> = raw
            .iter()
            .map(|v| MarketItem::from_upstream(v, fallback_category))
            .collect();
        let total = payload
            .pointer("/data/totalElements")
            .and_then(Value::as_i64)
            .unwrap_or(items.len() as i64);

        Ok(MarketPage { items, total })
    }
}

/// Storefront category to marketplace category-node code.
///
/// The marketplace files food, treats and supplies under the same
/// pet-supplies node, so all three resolve to one code.
pub fn category_code(category: &str) -> &'static str {
    match category {
        "food" => "50000008",
        "treats" => "50000008",
        "supplies" => "50000008",
        _ => "50000008",
    }
}

impl MarketItem {
    /// Map an upstream record, tolerating both of the field spellings the
    /// marketplace uses.
    pub fn from_upstream(v: &Value, category: &str) -> Self {
        let product_id = v.get("productId");
        let id = v
            .get("sellerProductId")
            .or(product_id)
            .cloned()
            .unwrap_or(Value::Null);

        let link = str_field(v, &["productUrl", "coupangUrl"])
            .map(str::to_string)
            .or_else(|| {
                product_id.map(|p| format!("https://www.coupang.com/vp/products/{}", plain(p)))
            });

        Self {
            id,
            name: str_field(v, &["productName", "name"]).unwrap_or_default().to_string(),
            price: v
                .get("salePrice")
                .or_else(|| v.get("price"))
                .and_then(Value::as_i64)
                .unwrap_or(0),
            image: str_field(v, &["productImage", "imageUrl"]).map(str::to_string),
            link,
            brand: str_field(v, &["brandName", "brand"]).unwrap_or_default().to_string(),
            category: category.to_string(),
            rating: v.get("rating").and_then(Value::as_f64).unwrap_or(4.5),
            description: str_field(v, &["productDescription", "description"])
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn str_field<'a>(v: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| v.get(*k).and_then(Value::as_str))
}

fn plain(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Static fallback used whenever a list call fails or errors.
pub fn sample_products(category: Option<&str>) -> Vec<MarketItem> {
    match category {
        Some("food") => food_samples(),
        Some("treats") => treat_samples(),
        Some("supplies") => supply_samples(),
        _ => {
            let mut all = food_samples();
            all.extend(treat_samples());
            all.extend(supply_samples());
            all
        }
    }
}

fn sample(
    id: &str,
    name: &str,
    price: i64,
    brand: &str,
    category: &str,
    rating: f64,
    description: &str,
) -> MarketItem {
    MarketItem {
        id: Value::String(id.to_string()),
        name: name.to_string(),
        price,
        image: Some(
            "https://images.unsplash.com/photo-1629904853716-f0bc54eea481?auto=format&fit=crop&w=400&q=80"
                .to_string(),
        ),
        link: Some(SAMPLE_LINK.to_string()),
        brand: brand.to_string(),
        category: category.to_string(),
        rating,
        description: description.to_string(),
    }
}

fn food_samples() -> Vec<MarketItem> {
    vec![
        sample("coupang-1", "로얄캐닌 미니 어덜트 건식사료 3.5kg", 45000, "로얄캐닌", "food", 4.7, "영양 균형이 완벽한 프리미엄 사료"),
        sample("coupang-2", "오리젠 어덜트 독 2kg", 52000, "오리젠", "food", 4.8, "천연 원료로 만든 고품질 사료"),
        sample("coupang-3", "아카나 그랜스프리 독 6.8kg", 89000, "아카나", "food", 4.9, "곡물 없는 프리미엄 사료"),
        sample("coupang-4", "힐스 사이언스 다이어트 어덜트 12kg", 125000, "힐스", "food", 4.7, "수의사 추천 건강 사료"),
    ]
}

fn treat_samples() -> Vec<MarketItem> {
    vec![
        sample("coupang-11", "그린이즈 육포 100g", 12000, "그린이즈", "treats", 4.5, "순 닭고기로 만든 건강 간식"),
        sample("coupang-12", "바우와우 소프트바 200g", 15000, "바우와우", "treats", 4.6, "부드러운 식감의 건강 간식"),
        sample("coupang-13", "로얄캐닌 덴탈 케어 스틱 420g", 22000, "로얄캐닌", "treats", 4.8, "치아 건강 케어 간식"),
        sample("coupang-14", "비타민스낵 연어 150g", 16000, "비타민스낵", "treats", 4.4, "오메가3 풍부한 연어 간식"),
    ]
}

fn supply_samples() -> Vec<MarketItem> {
    vec![
        sample("coupang-21", "LED 발광 목걸이", 15000, "펫라이트", "supplies", 4.3, "야간 산책용 LED 목걸이"),
        sample("coupang-22", "스마트 자동급식기 2.5L", 75000, "펫슬림", "supplies", 4.7, "자동으로 사료를 제공하는 스마트 급식기"),
        sample("coupang-23", "강아지 침대 대형", 45000, "코지펫", "supplies", 4.6, "편안한 수면을 위한 프리미엄 침대"),
        sample("coupang-24", "강아지 배변패드 100매", 15000, "클린펫", "supplies", 4.6, "흡수력 좋은 배변패드"),
    ]
}
