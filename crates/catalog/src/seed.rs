//! Static catalog seed: loaded once at process start, never mutated.

use crate::product::Product;

/// The storefront's built-in product records.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            image: Some("https://images.unsplash.com/photo-1629904853716-f0bc54eea481?auto=format&fit=crop&w=400&q=80".to_string()),
            weight: Some("3.5kg".to_string()),
            age_range: Some("성견".to_string()),
            ..Product::new(1, "food", "로얄캐닌 미니 어덜트 건식사료 3.5kg", "로얄캐닌", 45000, 4.7, "영양 균형이 완벽한 프리미엄 사료")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1558788353-f76d92427f16?auto=format&fit=crop&w=400&q=80".to_string()),
            weight: Some("2kg".to_string()),
            ..Product::new(2, "food", "오리젠 어덜트 독 2kg", "오리젠", 52000, 4.8, "천연 원료로 만든 고품질 사료")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1601758123927-19600d34e252?auto=format&fit=crop&w=400&q=80".to_string()),
            weight: Some("3kg".to_string()),
            age_range: Some("퍼피".to_string()),
            ..Product::new(3, "food", "프로플랜 포스틱스 퍼피 3kg", "퓨리나", 38000, 4.6, "강아지를 위한 완벽한 성장 사료")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1558788353-f76d92427f16?auto=format&fit=crop&w=400&q=80".to_string()),
            weight: Some("12kg".to_string()),
            ..Product::new(4, "food", "힐스 사이언스 다이어트 어덜트 12kg", "힐스", 125000, 4.5, "수의사 추천 건강 사료")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1619983081563-4301e2903c2f?auto=format&fit=crop&w=400&q=80".to_string()),
            ingredients: Some("닭고기, 글리세린".to_string()),
            ..Product::new(5, "treats", "로얄캐닌 덴탈 케어 스틱 420g", "로얄캐닌", 22000, 4.8, "치아 건강 케어 간식")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1619983081563-4301e2903c2f?auto=format&fit=crop&w=400&q=80".to_string()),
            ingredients: Some("닭가슴살 100%".to_string()),
            ..Product::new(6, "treats", "그린이즈 수제 육포 100g", "그린이즈", 12000, 4.5, "순 닭고기로 만든 건강 간식")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1629904853716-f0bc54eea481?auto=format&fit=crop&w=400&q=80".to_string()),
            ingredients: Some("연어, 오메가3".to_string()),
            ..Product::new(7, "treats", "비타민스낵 연어 150g", "비타민스낵", 16000, 4.4, "오메가3 풍부한 연어 간식")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1558788353-f76d92427f16?auto=format&fit=crop&w=400&q=80".to_string()),
            color: Some("블루".to_string()),
            material: Some("실리콘".to_string()),
            ..Product::new(8, "supplies", "LED 발광 목걸이", "펫라이트", 15000, 4.3, "야간 산책용 LED 목걸이")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1619983081563-4301e2903c2f?auto=format&fit=crop&w=400&q=80".to_string()),
            size: Some("대형".to_string()),
            material: Some("면".to_string()),
            ..Product::new(9, "supplies", "코지펫 강아지 침대 대형", "코지펫", 45000, 4.6, "편안한 수면을 위한 프리미엄 침대")
        },
        Product {
            image: Some("https://images.unsplash.com/photo-1601758123927-19600d34e252?auto=format&fit=crop&w=400&q=80".to_string()),
            size: Some("표준형 100매".to_string()),
            ..Product::new(10, "supplies", "클린펫 강아지 배변패드 100매", "클린펫", 15000, 4.4, "흡수력 좋은 배변패드")
        },
    ]
}
