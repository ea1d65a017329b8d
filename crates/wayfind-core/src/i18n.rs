//! Display strings for the map screen.

use serde::{Deserialize, Serialize};

use crate::error::WayfindError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "vi")]
    Vi,
    #[serde(rename = "th")]
    Th,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::ZhTw,
        Language::En,
        Language::Ja,
        Language::Ko,
        Language::Vi,
        Language::Th,
    ];

    /// Language used when a string is missing in the requested one.
    pub const FALLBACK: Language = Language::ZhTw;

    pub fn tag(self) -> &'static str {
        match self {
            Self::ZhTw => "zh-TW",
            Self::En => "en",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Vi => "vi",
            Self::Th => "th",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::ZhTw => "中文",
            Self::En => "English",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::Vi => "Tiếng Việt",
            Self::Th => "ภาษาไทย",
        }
    }

    fn column(self) -> usize {
        match self {
            Self::ZhTw => 0,
            Self::En => 1,
            Self::Ja => 2,
            Self::Ko => 3,
            Self::Vi => 4,
            Self::Th => 5,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "zh-tw" | "zh_tw" | "zh" => Ok(Self::ZhTw),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "ja" | "ja-jp" => Ok(Self::Ja),
            "ko" | "ko-kr" => Ok(Self::Ko),
            "vi" | "vi-vn" => Ok(Self::Vi),
            "th" | "th-th" => Ok(Self::Th),
            _ => Err(WayfindError::Config(format!("unsupported language: {s}"))),
        }
    }
}

/// Columns follow [`Language::column`]; an empty cell means "not translated".
type Row = (&'static str, [&'static str; 6]);

const STRINGS: &[Row] = &[
    ("go_to", ["前往", "Go to", "へ行く", "이동", "Đi đến", "ไปที่"]),
    (
        "est_dist",
        [
            "預計 2 分鐘 • 剩餘 150 公尺",
            "2 min • 150m left",
            "2分 • 残り150m",
            "2분 • 150m 남음",
            "2 phút • còn 150m",
            "2 นาที • เหลือ 150 ม.",
        ],
    ),
    ("ar_mode", ["AR模式", "AR Mode", "ARモード", "AR 모드", "Chế độ AR", "โหมด AR"]),
    (
        "map_mode",
        ["地圖模式", "Map Mode", "地図モード", "지도 모드", "Chế độ bản đồ", "โหมดแผนที่"],
    ),
    ("mute", ["靜音", "Mute", "ミュート", "음소거", "Tắt tiếng", "ปิดเสียง"]),
    (
        "quick_nav",
        ["快速導航", "Quick Nav", "クイックナビ", "빠른 탐색", "Điều hướng nhanh", "นำทางด่วน"],
    ),
    ("camera_error", ["相機無法使用", "Camera Error", "", "", "", ""]),
    ("close_ar", ["關閉 AR 模式", "Close AR", "", "", "", ""]),
    (
        "camera_unavailable",
        [
            "此裝置無法使用相機。",
            "Camera API not available on this device.",
            "",
            "",
            "",
            "",
        ],
    ),
    (
        "camera_permission_denied",
        [
            "相機權限遭拒，請允許相機存取以使用 AR 模式。",
            "Camera permission denied. Please allow camera access to use AR mode.",
            "",
            "",
            "",
            "",
        ],
    ),
    ("turn_right", ["前方右轉", "Turn right ahead", "", "", "", ""]),
    ("turn_distance", ["10 公尺後", "In 10 m", "", "", "", ""]),
    ("sheet_instruction", ["前方 10 公尺右轉", "Turn right in 10 m", "", "", "", ""]),
    ("current_floor", ["您目前在 A 棟 3 樓", "You are on 3F, Building A", "", "", "", ""]),
    // Locations
    ("restroom", ["洗手間", "Restroom", "トイレ", "화장실", "Nhà vệ sinh", "ห้องน้ำ"]),
    ("pharmacy", ["藥局", "Pharmacy", "薬局", "약국", "Nhà thuốc", "ร้านขายยา"]),
    ("cashier", ["批價掛號", "Cashier", "会計", "수납/접수", "Thu ngân", "ชำระเงิน"]),
    ("exit", ["出口", "Exit", "出口", "출구", "Lối ra", "ทางออก"]),
    (
        "registration",
        ["掛號櫃台", "Registration", "受付", "접수처", "Đăng ký", "ลงทะเบียน"],
    ),
    ("emergency", ["急診", "Emergency", "救急", "응급실", "Cấp cứu", "ฉุกเฉิน"]),
    (
        "info_desk",
        ["服務台", "Info Desk", "案内所", "안내 데스크", "Quầy thông tin", "จุดประชาสัมพันธ์"],
    ),
    ("water", ["飲水機", "Water", "給水機", "정수기", "Nước uống", "น้ำดื่ม"]),
    ("elevator", ["電梯 / 樓梯", "Elevator", "エレベーター", "엘리베이터", "Thang máy", "ลิฟต์"]),
    (
        "clinic_heart",
        ["放射科", "Radiology", "放射線科", "방사선과", "Khoa X-quang", "รังสีวิทยา"],
    ),
    (
        "clinic_302",
        ["X光室 報到處", "X-Ray Reception", "X線受付", "X-레이 접수", "X-quang Tiếp tân", "แผนกเอกซเรย์"],
    ),
    ("radiology", ["放射科", "Radiology", "放射線科", "방사선과", "X-quang", "รังสีวิทยา"]),
];

/// Look up `key` in `lang`, then in the fallback language, then return the key itself.
pub fn translate(key: &str, lang: Language) -> String {
    let Some((_, cells)) = STRINGS.iter().find(|(k, _)| *k == key) else {
        return key.to_string();
    };
    [cells[lang.column()], cells[Language::FALLBACK.column()]]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(key)
        .to_string()
}

pub fn has_translation(key: &str) -> bool {
    STRINGS.iter().any(|(k, _)| *k == key)
}
