//! Version subcommand implementation

use ferrolisten::TunnelKind;

pub fn run() {
    println!("ferrolisten {}", env!("CARGO_PKG_VERSION"));

    let kinds: Vec<&str> = TunnelKind::ALL.iter().map(|k| k.as_str()).collect();
    println!("tunnel types: {}", kinds.join(", "));

    #[cfg(target_os = "linux")]
    println!("target: linux");
    #[cfg(target_os = "macos")]
    println!("target: macos");
    #[cfg(target_os = "windows")]
    println!("target: windows");
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    println!("target: unknown");
}
