//! Static ski resort catalog.
//!
//! Pure data: the orchestrator treats it as a read-only input and never
//! mutates it. Identifiers are stable slugs so snapshots can be keyed
//! across process restarts.

/// Operating hour bands for a resort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingHours {
    /// Daytime band, e.g. "09:00 - 16:30"
    pub day: String,
    /// Night skiing band, if offered
    pub night: Option<String>,
    /// Late-night band, if offered
    pub late_night: Option<String>,
}

impl OperatingHours {
    pub fn new(
        day: impl Into<String>,
        night: Option<&str>,
        late_night: Option<&str>,
    ) -> Self {
        Self {
            day: day.into(),
            night: night.map(str::to_string),
            late_night: late_night.map(str::to_string),
        }
    }

    /// Single daytime band only.
    pub fn simple(hours: impl Into<String>) -> Self {
        Self::new(hours, None, None)
    }

    /// Compact one-band display, for card-sized surfaces.
    pub fn short_summary(&self) -> String {
        if self.night.is_some() {
            format!("Day {}", self.day)
        } else {
            self.day.clone()
        }
    }

    /// Full display with every offered band.
    pub fn detail_text(&self) -> String {
        let mut text = format!("Day {}", self.day);
        if let Some(night) = &self.night {
            text.push_str(&format!(" | Night {}", night));
        }
        if let Some(late_night) = &self.late_night {
            text.push_str(&format!(" | Late night {}", late_night));
        }
        text
    }
}

/// One ski resort: identity, coordinates, and reference links.
#[derive(Debug, Clone, PartialEq)]
pub struct Resort {
    /// Stable unique identifier (slug), the snapshot mapping key.
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub homepage_url: String,
    pub slope_status_url: String,
    pub webcam_url: Option<String>,
    pub operating_hours: OperatingHours,
}

#[allow(clippy::too_many_arguments)]
fn resort(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    homepage_url: &str,
    slope_status_url: &str,
    webcam_url: Option<&str>,
    operating_hours: OperatingHours,
) -> Resort {
    Resort {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        homepage_url: homepage_url.to_string(),
        slope_status_url: slope_status_url.to_string(),
        webcam_url: webcam_url.map(str::to_string),
        operating_hours,
    }
}

/// The fixed resort catalog, in display order.
pub fn catalog() -> Vec<Resort> {
    vec![
        // Gangwon, Jeongseon
        resort(
            "high1",
            "하이원 리조트",
            37.2067,
            128.8390,
            "https://www.high1.com",
            "https://www.high1.com/ski/slopeView.do?key=748&mode=p",
            None,
            OperatingHours::new("09:00 - 16:00", Some("18:00 - 22:00"), None),
        ),
        // Gangwon, Pyeongchang
        resort(
            "yongpyong",
            "모나 용평",
            37.6450,
            128.6810,
            "https://www.yongpyong.co.kr",
            "https://www.yongpyong.co.kr/kor/skiNboard/slope/openStatusBoard.do",
            Some("https://www.yongpyong.co.kr/kor/guide/realTimeNews/ypResortWebcam.do"),
            OperatingHours::new("09:00 - 17:00", Some("18:30 - 22:00"), None),
        ),
        // Gangwon, Hongcheon
        resort(
            "vivaldi-park",
            "비발디파크",
            37.6480,
            127.6840,
            "https://www.sonohotelsresorts.com/vp",
            "https://www.sonohotelsresorts.com/skiboard/status",
            None,
            OperatingHours::new(
                "08:30 - 16:30",
                Some("18:30 - 22:30"),
                Some("22:00 - 익일 03:00"),
            ),
        ),
        // Gangwon, Pyeongchang
        resort(
            "phoenix-pyeongchang",
            "휘닉스 평창",
            37.5834,
            128.3254,
            "https://phoenixhnr.co.kr/pyeongchang/index",
            "https://phoenixhnr.co.kr/static/pyeongchang/snowpark/slope-lift",
            Some("https://phoenixhnr.co.kr/page/pyeongchang/guide/operation/sketchMovie"),
            OperatingHours::new("09:00 - 16:00", Some("18:00 - 22:00"), Some("22:00 - 24:00")),
        ),
        // Gangwon, Hoengseong
        resort(
            "wellihilli",
            "웰리힐리파크",
            37.4906,
            128.2506,
            "https://www.wellihillipark.com",
            "https://m.wellihillipark.com/snowpark/schedule/open-slope",
            Some("https://m.wellihillipark.com/customer/webcam"),
            OperatingHours::new("09:00 - 16:30", Some("18:30 - 22:30"), Some("22:30 - 24:00")),
        ),
        // Gangwon, Pyeongchang
        resort(
            "alpensia",
            "알펜시아",
            37.6628,
            128.6814,
            "https://www.alpensia.com",
            "https://www.alpensia.com/ski/slope-now.do",
            Some("https://www.alpensia.com/guide/web-cam.do"),
            OperatingHours::new("09:00 - 17:00", Some("18:30 - 21:30"), None),
        ),
        // Gangwon, Chuncheon
        resort(
            "elysian-gangchon",
            "엘리시안 강촌",
            37.8164,
            127.5870,
            "https://www.elysian.co.kr",
            "https://www.elysian.co.kr/about-gangchon/sky#guide-to-using-slopes",
            None,
            OperatingHours::new(
                "09:00 - 17:00",
                Some("18:30 - 24:00(일~목)"),
                Some("18:30 - 03:00 (금,토)"),
            ),
        ),
        // Gangwon, Taebaek
        resort(
            "o2-resort",
            "오투리조트",
            37.1775,
            128.9478,
            "https://www.o2resort.com",
            "https://www.o2resort.com/SKI/slopeOpen.jsp",
            Some("https://www.o2resort.com/SKI/liftInfo.jsp"),
            OperatingHours::new("09:00 - 16:30", Some("18:00 - 21:30"), None),
        ),
        // Gyeonggi, Gwangju
        resort(
            "konjiam",
            "곤지암 리조트",
            37.3369,
            127.2936,
            "https://www.konjiamresort.co.kr",
            "https://www.konjiamresort.co.kr/ski/slopeOpenClose.dev",
            Some("https://www.konjiamresort.co.kr/ski/liveCam.dev"),
            OperatingHours::new("09:00 - 17:00", Some("19:00 - 22:00"), Some("22:00 - 02:00")),
        ),
        // Gyeonggi, Icheon
        resort(
            "jisan-forest",
            "지산 포레스트",
            37.2167,
            127.3453,
            "https://www.jisanresort.co.kr",
            "https://www.jisanresort.co.kr/m/ski/slopes/info.asp",
            Some("https://www.jisanresort.co.kr/m/ski/slopes/webcam.asp"),
            OperatingHours::new("09:00 - 17:00", Some("18:30 - 23:00"), Some("23:00 - 02:00")),
        ),
        // Jeonbuk, Muju
        resort(
            "muju-deogyusan",
            "무주 덕유산",
            35.8908,
            127.7369,
            "https://www.mdysresort.com",
            "https://www.mdysresort.com/convert_main_slope_221207.asp",
            Some("https://www.mdysresort.com/guide/webcam.asp"),
            OperatingHours::new("09:30 - 16:00", Some("18:30 - 22:00"), Some("22:00 - 24:00")),
        ),
        // Gyeongnam, Yangsan
        resort(
            "eden-valley",
            "에덴밸리",
            35.4289,
            128.9844,
            "http://www.edenvalley.co.kr",
            "https://www.edenvalley.co.kr/Ski/View.asp?location=01-1",
            Some("https://www.edenvalley.co.kr/CS/cam_pop1.asp"),
            OperatingHours::new("10:00 - 17:00", Some("19:00 - 23:00"), None),
        ),
    ]
}
