use std::fmt;

use crate::{Listener, MetricItem, Subscription};

/// Placeholder shown when the host does not report a value.
pub const UNKNOWN: &str = "Unknown";

/// A width × height pair in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Dimensions {
    /// Create a new pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// Static device facts plus the live viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentInfo {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// `navigator.language`
    pub language: String,
    /// `navigator.platform`
    pub platform: String,
    /// Screen resolution
    pub screen: Dimensions,
    /// Current inner window size
    pub viewport: Dimensions,
}

/// Network-quality descriptor, when the host exposes one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionInfo {
    /// Coarse classification such as `"4g"`
    pub effective_type: Option<String>,
    /// Estimated bandwidth in megabits per second
    pub downlink: Option<f64>,
}

/// Connectivity as last reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStatus {
    /// Whether the host believes it is online
    pub online: bool,
    /// Absent entirely on hosts without a network-information capability
    pub connection: Option<ConnectionInfo>,
}

impl Default for NetworkStatus {
    fn default() -> Self {
        Self {
            online: true,
            connection: None,
        }
    }
}

/// A change pushed by an [`EnvironmentProvider`] subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentChange {
    /// The window was resized to the given viewport
    Resized(Dimensions),
    /// The host went online
    Online,
    /// The host went offline
    Offline,
    /// The connection descriptor changed
    Connection(Option<ConnectionInfo>),
}

impl EnvironmentChange {
    /// Fold this change into the environment facts it affects.
    pub fn apply_to_environment(&self, environment: &mut EnvironmentInfo) -> bool {
        match self {
            EnvironmentChange::Resized(viewport) => {
                environment.viewport = *viewport;
                true
            }
            _ => false,
        }
    }

    /// Fold this change into the network status it affects.
    pub fn apply_to_network(&self, network: &mut NetworkStatus) -> bool {
        match self {
            EnvironmentChange::Online => network.online = true,
            EnvironmentChange::Offline => network.online = false,
            EnvironmentChange::Connection(connection) => network.connection = connection.clone(),
            EnvironmentChange::Resized(_) => return false,
        }
        true
    }
}

/// Source of device, viewport and connectivity facts.
pub trait EnvironmentProvider {
    /// Read the current environment facts.
    fn environment(&self) -> EnvironmentInfo;
    /// Read the current network status.
    fn network(&self) -> NetworkStatus;
    /// Register `listener` for resize, online, offline and connection
    /// changes. The listener stays registered for the lifetime of the
    /// returned [`Subscription`].
    fn subscribe(&self, listener: Listener<EnvironmentChange>) -> Subscription;
}

impl<T> EnvironmentProvider for std::sync::Arc<T>
where
    T: EnvironmentProvider + ?Sized,
{
    fn environment(&self) -> EnvironmentInfo {
        (**self).environment()
    }

    fn network(&self) -> NetworkStatus {
        (**self).network()
    }

    fn subscribe(&self, listener: Listener<EnvironmentChange>) -> Subscription {
        (**self).subscribe(listener)
    }
}

/// Rows for the "Environment & Device" card.
pub fn environment_items(environment: &EnvironmentInfo) -> Vec<MetricItem> {
    vec![
        MetricItem::new("User Agent", environment.user_agent.clone()),
        MetricItem::new("Language", environment.language.clone()),
        MetricItem::new("Platform", environment.platform.clone()),
        MetricItem::new("Screen Resolution", environment.screen.to_string()),
        MetricItem::new("Viewport (Live)", environment.viewport.to_string()).accent(),
    ]
}

/// Rows for the "Network" card.
pub fn network_items(network: &NetworkStatus) -> Vec<MetricItem> {
    let connection = network.connection.as_ref();

    let effective_type = connection
        .and_then(|c| c.effective_type.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let downlink = connection
        .and_then(|c| c.downlink)
        .filter(|d| *d != 0.0 && !d.is_nan())
        .map(|d| format!("{d} Mbps"))
        .unwrap_or_else(|| UNKNOWN.to_string());

    vec![
        MetricItem::new("Status", if network.online { "Online" } else { "Offline" })
            .dot(network.online),
        MetricItem::new("Connection Type", effective_type),
        MetricItem::new("Downlink", downlink),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FakeEnvironment;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    fn sample_environment() -> EnvironmentInfo {
        EnvironmentInfo {
            user_agent: "Mozilla/5.0".into(),
            language: "en-US".into(),
            platform: "Linux x86_64".into(),
            screen: Dimensions::new(1920, 1080),
            viewport: Dimensions::new(1280, 720),
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_lists_environment_rows() {
        let items = environment_items(&sample_environment());

        assert_eq!(
            items,
            vec![
                MetricItem::new("User Agent", "Mozilla/5.0"),
                MetricItem::new("Language", "en-US"),
                MetricItem::new("Platform", "Linux x86_64"),
                MetricItem::new("Screen Resolution", "1920 × 1080"),
                MetricItem::new("Viewport (Live)", "1280 × 720").accent(),
            ]
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_reports_unknown_without_connection_info() {
        let items = network_items(&NetworkStatus {
            online: false,
            connection: None,
        });

        assert_eq!(
            items,
            vec![
                MetricItem::new("Status", "Offline").dot(false),
                MetricItem::new("Connection Type", "Unknown"),
                MetricItem::new("Downlink", "Unknown"),
            ]
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_formats_connection_info() {
        let items = network_items(&NetworkStatus {
            online: true,
            connection: Some(ConnectionInfo {
                effective_type: Some("4g".into()),
                downlink: Some(10.0),
            }),
        });

        assert_eq!(items[0], MetricItem::new("Status", "Online").dot(true));
        assert_eq!(items[1].value, "4g");
        assert_eq!(items[2].value, "10 Mbps");

        let items = network_items(&NetworkStatus {
            online: true,
            connection: Some(ConnectionInfo {
                effective_type: None,
                downlink: Some(1.45),
            }),
        });
        assert_eq!(items[1].value, "Unknown");
        assert_eq!(items[2].value, "1.45 Mbps");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_treats_zero_downlink_as_unknown() {
        let items = network_items(&NetworkStatus {
            online: true,
            connection: Some(ConnectionInfo {
                effective_type: Some("3g".into()),
                downlink: Some(0.0),
            }),
        });
        assert_eq!(items[2].value, "Unknown");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_applies_changes_to_the_state_they_affect() {
        let mut environment = sample_environment();
        let mut network = NetworkStatus::default();

        let resize = EnvironmentChange::Resized(Dimensions::new(800, 600));
        assert!(resize.apply_to_environment(&mut environment));
        assert!(!resize.apply_to_network(&mut network));
        assert_eq!(environment.viewport, Dimensions::new(800, 600));

        assert!(EnvironmentChange::Offline.apply_to_network(&mut network));
        assert!(!network.online);
        assert!(!EnvironmentChange::Online.apply_to_environment(&mut environment));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_delivers_changes_until_unsubscribed() {
        let provider = FakeEnvironment::new(sample_environment(), NetworkStatus::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let subscription = provider.subscribe(Arc::new(move |change| sink.lock().push(change)));
        assert_eq!(provider.listener_count(), 1);

        provider.emit(EnvironmentChange::Offline);
        provider.emit(EnvironmentChange::Resized(Dimensions::new(10, 20)));

        subscription.unsubscribe();
        assert_eq!(provider.listener_count(), 0);

        provider.emit(EnvironmentChange::Online);

        assert_eq!(
            *seen.lock(),
            vec![
                EnvironmentChange::Offline,
                EnvironmentChange::Resized(Dimensions::new(10, 20)),
            ]
        );
    }
}
