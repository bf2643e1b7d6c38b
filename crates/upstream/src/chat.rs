//! Chat-completion client with a canned keyword fallback.
//!
//! The storefront's support chat never fails outward: with no API key
//! configured, or on any upstream failure, the reply comes from the canned
//! keyword matcher instead.

use reqwest::Client;
use serde_json::{Value, json};

use crate::error::UpstreamError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

const MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = "당신은 ACN(Animal Care Net) 반려동물 케어 플랫폼의 고객센터 상담원입니다. \
친절하고 전문적으로 반려동물 관련 질문에 답변해주세요. 사료, 간식, 용품, 동물병원, 펫보험, \
유기동물 등에 대한 정보를 제공할 수 있습니다.";

const EMPTY_COMPLETION: &str = "죄송합니다. 답변을 생성할 수 없습니다.";

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Produce a reply for a customer message. Never fails: any upstream
    /// problem degrades to the canned matcher.
    pub async fn reply(&self, message: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return canned_reply(message);
        };

        match self.complete(key, message).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("chat completion failed, using canned reply: {err}");
                canned_reply(message)
            }
        }
    }

    async fn complete(&self, key: &str, message: &str) -> Result<String, UpstreamError> {
        let body = json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
            "max_tokens": 500,
            "temperature": 0.7,
        });

        let resp = self
            .http
            .post(&self.base_url)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let payload: Value = resp.json().await?;
        Ok(payload
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or(EMPTY_COMPLETION)
            .to_string())
    }
}

/// Keyword-matched canned reply; first matching branch wins.
pub fn canned_reply(message: &str) -> String {
    let m = message.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|k| m.contains(k));

    if has(&["예방접종", "접종", "백신"]) {
        if has(&["강아지", "개"]) {
            "강아지 예방접종 정보입니다! 💉 종합백신(DHPPL)은 6~8주부터 3~4주 간격으로 3회, \
             광견병은 3개월 이상부터 1년마다 접종합니다. 접종 일정은 마이페이지의 '예방접종 캘린더'에서 관리하실 수 있습니다!"
        } else if has(&["고양이", "고양"]) {
            "고양이 예방접종 정보입니다! 💉 3종 혼합백신(FVRCP)은 6~8주부터 3~4주 간격으로 2~3회, \
             광견병은 3개월 이상부터 접종합니다. 접종 일정은 마이페이지의 '예방접종 캘린더'에서 관리하실 수 있습니다!"
        } else {
            "예방접종에 대해 물어보셨네요! 💉 구체적인 접종 일정은 반려동물의 나이와 종류에 따라 다릅니다. \
             동물병원에서 상담받으시거나 마이페이지의 '예방접종 캘린더'를 이용해보세요!"
        }
    } else if has(&["사료", "먹이"]) {
        "사료 관련 문의사항이시군요! ACN에서는 다양한 프리미엄 사료를 제공하고 있습니다. \
         상품 페이지에서 사료 카테고리를 선택해보세요! 🐕"
    } else if has(&["간식"]) {
        "간식에 대해 물어보셨네요! 건강한 천연 간식부터 특별한 날을 위한 간식까지 간식 카테고리에서 만나보실 수 있습니다! 🦴"
    } else if has(&["병원", "의원"]) {
        "동물병원 찾기 서비스를 이용하시려면 상단 메뉴의 '동물병원조회'를 클릭해주세요. \
         지역명이나 병원 이름으로 검색하실 수 있습니다. 🏥"
    } else if has(&["보험", "펫보험"]) {
        "펫보험에 관심이 있으시군요! 상단 메뉴의 '반려동물 보험'에서 다양한 보험 상품을 비교하고 가입하실 수 있습니다. 💳"
    } else if has(&["유기동물", "유기"]) {
        "유기동물 보호 현황을 확인하시려면 상단 메뉴의 '유기동물 현황'을 클릭해주세요. 🐾"
    } else if has(&["주문", "배송"]) {
        "주문 및 배송 관련 문의는 마이페이지의 주문 내역에서 확인하실 수 있습니다. \
         배송 문의는 주문 번호와 함께 고객센터로 연락주세요! 📦"
    } else if has(&["반품", "교환"]) {
        "반품/교환은 상품 수령 후 7일 이내에 가능합니다. 마이페이지에서 신청하시거나 고객센터로 연락주세요. 🔄"
    } else if has(&["건강", "질병", "병"]) {
        "반려동물 건강에 대해 물어보셨네요! 🏥 정기 검진은 1년에 1~2회 권장하며, 이상 징후 발견 시 \
         즉시 병원에 방문하세요. 동물병원 찾기는 상단 메뉴의 '동물병원조회'를 이용해보세요!"
    } else if has(&["훈련", "교육"]) {
        "반려동물 훈련에 대해 물어보셨네요! 🎓 기본 명령어부터 시작해 간식과 칭찬으로 긍정적 강화를 \
         활용해보세요. 훈련용 간식은 상품 페이지에서 구매하실 수 있습니다!"
    } else {
        "안녕하세요! ACN 고객센터입니다. 반려동물 관련하여 사료, 간식, 용품, 동물병원, 펫보험, \
         유기동물, 예방접종 등 다양한 정보를 제공하고 있습니다. 구체적으로 어떤 도움이 필요하신가요? 😊"
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vaccination_branch_wins_over_food() {
        // "사료" also appears, but the vaccination branch is checked first.
        let reply = canned_reply("강아지 사료 먹인 후 예방접종 해도 되나요?");
        assert!(reply.contains("예방접종"));
        assert!(reply.contains("DHPPL"));
    }

    #[test]
    fn species_refines_the_vaccination_reply() {
        assert!(canned_reply("고양이 백신 일정 알려줘").contains("FVRCP"));
        assert!(canned_reply("백신은 언제 맞아야 하나요").contains("예방접종"));
    }

    #[test]
    fn storefront_topics_route_to_their_sections() {
        assert!(canned_reply("사료 추천해주세요").contains("사료"));
        assert!(canned_reply("배송 언제 오나요").contains("주문"));
        assert!(canned_reply("반품하고 싶어요").contains("반품/교환"));
        assert!(canned_reply("근처 동물병원 알려줘").contains("동물병원조회"));
    }

    #[test]
    fn unmatched_message_gets_the_default_greeting() {
        assert!(canned_reply("안녕").contains("ACN 고객센터"));
    }
}
