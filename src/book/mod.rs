//! Chapter registry.
//!
//! The registry is the ordered list of chapters that make up the book. Its
//! order is document order: the scroll tracker assumes section `i` is
//! rendered above section `i + 1`.

pub mod content;

use crate::error::BookError;

/// One chapter of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Stable anchor id, unique across the registry.
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Search-only terms; never displayed.
    pub keywords: Vec<String>,
}

impl Chapter {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            keywords: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Built-in table: (id, title, subtitle, keywords).
const CHAPTERS: &[(&str, &str, Option<&str>, &[&str])] = &[
    (
        "ch1",
        "1장. 사주란 무엇일까요?",
        Some("내 인생의 사용 설명서"),
        &["사주", "팔자", "사주팔자", "운명", "바코드", "사용 설명서"],
    ),
    (
        "ch2",
        "2장. 만세력 이해하기",
        Some("네 기둥과 궁위론"),
        &["만세력", "년주", "월주", "일주", "시주", "궁위론", "기둥", "일간"],
    ),
    (
        "ch3",
        "3장. 오행 – 사주의 기본 뼈대",
        Some("목, 화, 토, 금, 수"),
        &["오행", "목", "화", "토", "금", "수", "나무", "불", "흙", "쇠", "물"],
    ),
    (
        "ch4",
        "4장. 천간과 지지",
        Some("하늘의 뜻과 땅의 환경"),
        &[
            "천간", "지지", "지장간", "갑", "을", "병", "정", "무", "기", "경", "신", "임",
            "계", "띠", "십이지",
        ],
    ),
    (
        "ch5",
        "5장. 십성 – 나를 둘러싼 10가지 역할",
        None,
        &[
            "십성", "육친", "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관",
            "편인", "정인",
        ],
    ),
    (
        "ch6",
        "6장. 합(合)과 충(冲) – 변화의 원리",
        None,
        &["합", "충", "합충", "끌림", "충돌", "변화"],
    ),
    (
        "ch7",
        "7장. 12운성 – 인생의 주기",
        None,
        &[
            "12운성", "십이운성", "장생", "목욕", "관대", "건록", "제왕", "쇠", "병", "사",
            "묘", "절", "태", "양",
        ],
    ),
    (
        "ch8",
        "8장. 12신살 – 특수 기운",
        Some("무슨 살이 꼈다는 말의 정체"),
        &[
            "12신살", "신살", "살", "겁살", "재살", "천살", "지살", "년살", "도화", "도화살",
            "월살", "망신살", "장성살", "반안살", "역마살", "육해살", "화개살",
        ],
    ),
    (
        "ch9",
        "9장. 대운과 세운 – 흐르는 시간의 힘",
        None,
        &["대운", "세운", "운", "계절", "날씨", "10년"],
    ),
    (
        "ch10",
        "10장. 실전 해석 순서",
        Some("사주 분석 5단계 로드맵"),
        &["실전", "해석", "분석", "용신", "신강", "신약", "월지", "로드맵"],
    ),
];

/// Ordered, read-only collection of chapters.
#[derive(Debug, Clone)]
pub struct ChapterRegistry {
    chapters: Vec<Chapter>,
}

impl ChapterRegistry {
    /// Build a registry, rejecting empty or duplicate ids.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, BookError> {
        for (index, chapter) in chapters.iter().enumerate() {
            if chapter.id.is_empty() {
                return Err(BookError::EmptyId { index });
            }
            if chapters[..index].iter().any(|c| c.id == chapter.id) {
                return Err(BookError::DuplicateId {
                    id: chapter.id.clone(),
                });
            }
        }
        Ok(Self { chapters })
    }

    /// The chapters of "가장 쉬운 사주명리학 입문".
    pub fn builtin() -> Result<Self, BookError> {
        let chapters = CHAPTERS
            .iter()
            .map(|(id, title, subtitle, keywords)| {
                let chapter = Chapter::new(*id, *title).with_keywords(keywords.iter().copied());
                match subtitle {
                    Some(s) => chapter.with_subtitle(*s),
                    None => chapter,
                }
            })
            .collect();
        Self::new(chapters)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Document-order index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.chapters.iter().map(|c| c.id.as_str())
    }
}

impl<'a> IntoIterator for &'a ChapterRegistry {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}
