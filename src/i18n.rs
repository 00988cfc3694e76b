//! Display language tables
//!
//! Language only changes how results are rendered; no computation depends on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::parse_named;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Telugu,
    Hindi,
}

/// Keys for every user-facing string of both dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    MonitorTitle,
    DatasetTitle,
    Temperature,
    Humidity,
    SoilMoisture,
    Csi,
    StressAlert,
    TemperatureAnomaly,
    CombinedChart,
    Trends,
    SoilSelect,
    FarmingSelect,
    SeasonAuto,
    Threshold,
    Generate,
    Download,
    DiseaseHeader,
    CameraPrompt,
    DiseaseDetected,
    Medicine,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
        }
    }

    pub fn text(self, phrase: Phrase) -> &'static str {
        match self {
            Language::English => english(phrase),
            Language::Telugu => telugu(phrase),
            Language::Hindi => hindi(phrase),
        }
    }

    /// `"{label}: {value}"` with a localized label.
    pub fn labelled(self, phrase: Phrase, value: impl fmt::Display) -> String {
        format!("{}: {}", self.text(phrase), value)
    }

    /// Treatment dosage line for the disease stub.
    pub fn dosage(self, grams_per_litre: u32) -> String {
        match self {
            Language::English => format!("Dosage: {grams_per_litre}g per litre, apply in evening"),
            Language::Telugu => {
                format!("డోసేజ్: లీటరుకు {grams_per_litre}g, సాయంత్రం వేయండి")
            }
            Language::Hindi => format!("खुराक: {grams_per_litre}g प्रति लीटर, शाम को लगाएं"),
        }
    }
}

fn english(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::MonitorTitle => "🌱 Farm Micro-Climate Monitoring Dashboard",
        Phrase::DatasetTitle => "🌱 Smart Farming Web Application",
        Phrase::Temperature => "Temperature",
        Phrase::Humidity => "Humidity",
        Phrase::SoilMoisture => "Soil Moisture",
        Phrase::Csi => "Crop Stress Index",
        Phrase::StressAlert => "⚠️ ALERT: Crop under stress!",
        Phrase::TemperatureAnomaly => "🚨 Anomaly detected in temperature!",
        Phrase::CombinedChart => {
            "📊 Combined Trends (Temperature, Humidity, Soil Moisture, CSI)"
        }
        Phrase::Trends => "📊 Trends",
        Phrase::SoilSelect => "Choose Soil Type",
        Phrase::FarmingSelect => "Choose Farming Type",
        Phrase::SeasonAuto => "Season automatically set to",
        Phrase::Threshold => "Stress Alert Threshold (CSI)",
        Phrase::Generate => "Generate Dataset",
        Phrase::Download => "Download Dataset as CSV",
        Phrase::DiseaseHeader => "🌿 Plant Disease Detection",
        Phrase::CameraPrompt => "Take a photo of the plant",
        Phrase::DiseaseDetected => "🚨 Disease detected",
        Phrase::Medicine => "Recommended Medicine",
    }
}

fn telugu(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::MonitorTitle => "🌱 వ్యవసాయ సూక్ష్మ-వాతావరణ పర్యవేక్షణ డాష్‌బోర్డ్",
        Phrase::DatasetTitle => "🌱 స్మార్ట్ వ్యవసాయ వెబ్ అప్లికేషన్",
        Phrase::Temperature => "ఉష్ణోగ్రత",
        Phrase::Humidity => "ఆర్ద్రత",
        Phrase::SoilMoisture => "మట్టి తేమ",
        Phrase::Csi => "పంట ఒత్తిడి సూచిక",
        Phrase::StressAlert => "⚠️ హెచ్చరిక: పంట ఒత్తిడిలో ఉంది!",
        Phrase::TemperatureAnomaly => "🚨 ఉష్ణోగ్రతలో అసాధారణం గుర్తించబడింది!",
        Phrase::CombinedChart => {
            "📊 కలిపిన ధోరణులు (ఉష్ణోగ్రత, ఆర్ద్రత, మట్టి తేమ, పంట ఒత్తిడి సూచిక)"
        }
        Phrase::Trends => "📊 Trends",
        Phrase::SoilSelect => "మట్టి రకం ఎంచుకోండి",
        Phrase::FarmingSelect => "వ్యవసాయం రకం ఎంచుకోండి",
        Phrase::SeasonAuto => "సీజన్ ఆటోమేటిక్‌గా సెట్ చేయబడింది",
        Phrase::Threshold => "ఒత్తిడి హెచ్చరిక పరిమితి (CSI)",
        Phrase::Generate => "డేటాసెట్ సృష్టించండి",
        Phrase::Download => "డేటాసెట్ CSV డౌన్‌లోడ్",
        Phrase::DiseaseHeader => "🌿 మొక్క వ్యాధి గుర్తింపు",
        Phrase::CameraPrompt => "మొక్క ఫోటో తీయండి",
        Phrase::DiseaseDetected => "🚨 వ్యాధి గుర్తించబడింది",
        Phrase::Medicine => "సిఫార్సు చేసిన మందు",
    }
}

fn hindi(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::MonitorTitle => "🌱 कृषि सूक्ष्म-जलवायु निगरानी डैशबोर्ड",
        Phrase::DatasetTitle => "🌱 स्मार्ट खेती वेब एप्लिकेशन",
        Phrase::Temperature => "तापमान",
        Phrase::Humidity => "आर्द्रता",
        Phrase::SoilMoisture => "मिट्टी की नमी",
        Phrase::Csi => "फसल तनाव सूचकांक",
        Phrase::StressAlert => "⚠️ चेतावनी: फसल तनाव में है!",
        Phrase::TemperatureAnomaly => "🚨 तापमान में असामान्यता पाई गई!",
        Phrase::CombinedChart => {
            "📊 संयुक्त प्रवृत्तियाँ (तापमान, आर्द्रता, मिट्टी की नमी, फसल तनाव सूचकांक)"
        }
        Phrase::Trends => "📊 Trends",
        Phrase::SoilSelect => "मिट्टी का प्रकार चुनें",
        Phrase::FarmingSelect => "खेती का प्रकार चुनें",
        Phrase::SeasonAuto => "मौसम स्वतः सेट किया गया",
        Phrase::Threshold => "तनाव चेतावनी सीमा (CSI)",
        Phrase::Generate => "डेटासेट बनाएं",
        Phrase::Download => "CSV डेटा सेट डाउनलोड करें",
        Phrase::DiseaseHeader => "🌿 पौध रोग पहचान",
        Phrase::CameraPrompt => "पौधे की फोटो लें",
        Phrase::DiseaseDetected => "🚨 रोग पाया गया",
        Phrase::Medicine => "अनुशंसित दवा",
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("language", s, &Language::ALL, Language::name)
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.name().to_string()
    }
}
