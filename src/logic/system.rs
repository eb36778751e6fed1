use serde::{Deserialize, Serialize};

/// Server-side processes whose logs can be downloaded from the system page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemProcess {
    App,
    Ce,
    Es,
    Web,
}

impl SystemProcess {
    pub const ALL: [SystemProcess; 4] = [
        SystemProcess::App,
        SystemProcess::Ce,
        SystemProcess::Es,
        SystemProcess::Web,
    ];

    /// Value of the `process` query parameter on the logs endpoint.
    pub fn query_value(&self) -> &'static str {
        match self {
            SystemProcess::App => "app",
            SystemProcess::Ce => "ce",
            SystemProcess::Es => "es",
            SystemProcess::Web => "web",
        }
    }

    /// Suggested filename for the downloaded log.
    pub fn download_filename(&self) -> &'static str {
        match self {
            SystemProcess::App => "qualityboard_app.log",
            SystemProcess::Ce => "qualityboard_ce.log",
            SystemProcess::Es => "qualityboard_es.log",
            SystemProcess::Web => "qualityboard_web.log",
        }
    }
}

pub const SYSTEM_INFO_FILENAME: &str = "qualityboard_system_info.json";

pub fn logs_url(base_url: &str, process: SystemProcess) -> String {
    format!("{}/api/system/logs?process={}", base_url, process.query_value())
}

pub fn system_info_url(base_url: &str) -> String {
    format!("{}/api/system/info", base_url)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadLink {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessLogLink {
    pub process: SystemProcess,
    pub url: String,
    pub filename: String,
}

/// Action links of the system page: the info download is always offered, the
/// per-process log downloads only to viewers allowed to read logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemLinks {
    pub info: DownloadLink,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<ProcessLogLink>,
}

pub fn system_links(base_url: &str, can_download_logs: bool) -> SystemLinks {
    let logs = if can_download_logs {
        SystemProcess::ALL
            .iter()
            .map(|process| ProcessLogLink {
                process: *process,
                url: logs_url(base_url, *process),
                filename: process.download_filename().to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    SystemLinks {
        info: DownloadLink {
            url: system_info_url(base_url),
            filename: SYSTEM_INFO_FILENAME.to_string(),
        },
        logs,
    }
}
