//! Static feature catalogue shown on the landing page.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeatureDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub capabilities: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Features {
    pub webcam: FeatureDescriptor,
    pub upload: FeatureDescriptor,
    pub youtube: FeatureDescriptor,
}

pub static FEATURES: Features = Features {
    webcam: FeatureDescriptor {
        name: "Live Webcam",
        description: "Real-time monitoring using your device's camera",
        status: "active",
        capabilities: &["face-detection", "motion-tracking", "incident-reporting"],
    },
    upload: FeatureDescriptor {
        name: "Video Upload",
        description: "Analyze pre-recorded videos for incidents",
        status: "active",
        capabilities: &["batch-processing", "frame-analysis", "export-results"],
    },
    youtube: FeatureDescriptor {
        name: "YouTube Stream",
        description: "Monitor YouTube streams and videos",
        status: "active",
        capabilities: &["stream-analysis", "real-time-alerts", "url-processing"],
    },
};
