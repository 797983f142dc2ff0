//! # Query Parameter Set
//!
//! 인가 요청 URL과 로그아웃 URL의 쿼리 파라미터를 다루는 순서 보존 컬렉션입니다.
//! 키 설정 시의 의미는 브라우저 `URLSearchParams.set`과 같습니다.
//! 같은 키가 여러 번 있으면 첫 위치의 값을 교체하고 나머지는 제거하며,
//! 없으면 끝에 추가합니다.
//!
//! URL 분해/조립은 `url::Url`, 쿼리 인코딩은 `url::form_urlencoded`를 사용합니다.
//! 들어온 쿼리에서 건드리지 않은 파라미터는 원래 인코딩 그대로 다시 나갑니다
//! (UTF-8이 아닌 `%FF` 같은 이스케이프 포함).
//!
//! ```rust
//! use asgardeo_auth_strategy::utils::query_params::ParameterSet;
//!
//! let mut params = ParameterSet::from_url("https://example.app/auth/asgardeo?test=1").unwrap();
//! params.set("scope", "openid profile");
//!
//! assert_eq!(params.get("test"), Some("1"));
//! assert_eq!(params.to_query_string(), "test=1&scope=openid+profile");
//! ```

use url::form_urlencoded;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    /// 들어온 그대로의 `k=v` 조각. 값이 바뀌면 `None`
    raw: Option<String>,
}

/// 순서가 보존되는 쿼리 파라미터 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<Pair>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `a=1&b=2` 형태의 쿼리 문자열을 파싱합니다.
    ///
    /// 선행 `?`는 무시하고, `=`가 없는 항목은 빈 값으로 취급합니다.
    pub fn from_query(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|segment| {
                form_urlencoded::parse(segment.as_bytes())
                    .next()
                    .map(|(key, value)| Pair {
                        key: key.into_owned(),
                        value: value.into_owned(),
                        raw: Some(segment.to_string()),
                    })
            })
            .collect();

        Self { pairs }
    }

    /// 절대 URL의 쿼리 부분을 파싱합니다.
    pub fn from_url(url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|pair| pair.key == key)
    }

    /// 키 값을 설정합니다 (`URLSearchParams.set` 의미).
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|pair| pair.key == key) {
            Some(index) => {
                self.pairs[index].value = value.to_string();
                self.pairs[index].raw = None;
                let mut seen = 0usize;
                self.pairs.retain(|pair| {
                    if pair.key != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push(Pair {
                key: key.to_string(),
                value: value.to_string(),
                raw: None,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
    }

    /// `application/x-www-form-urlencoded` 쿼리 문자열로 직렬화합니다.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|pair| match &pair.raw {
                Some(raw) => raw.clone(),
                None => format!("{}={}", encode(&pair.key), encode(&pair.value)),
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base`의 기존 쿼리를 이 파라미터 집합으로 대체한 URL을 만듭니다.
    ///
    /// fragment는 유지됩니다.
    pub fn apply_to(&self, base: &str) -> Result<String, url::ParseError> {
        let mut url = Url::parse(base)?;
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.to_query_string()));
        }
        Ok(url.to_string())
    }
}

fn encode(component: &str) -> String {
    form_urlencoded::byte_serialize(component.as_bytes()).collect()
}
