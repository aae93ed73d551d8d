use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Installs a fake `ss` executable into `dir`.
///
/// Enumeration calls print the given listing. `-K` calls are appended to
/// `kills.log` next to the script and exit 0, unless the filter expression
/// names one of `failing_dports`, in which case they exit 2.
pub fn install_fake_ss(dir: &Path, listing: &str, failing_dports: &[u16]) {
    fs::write(dir.join("listing.txt"), listing).expect("Failed to write listing fixture");

    let mut cases = String::new();
    for port in failing_dports {
        cases.push_str(&format!("    *\" dport = {} \"*) exit 2 ;;\n", port));
    }

    let script = format!(
        r#"#!/bin/sh
dir="$(dirname "$0")"
if [ "$1" = "-K" ]; then
  printf '%s\n' "$*" >> "$dir/kills.log"
  case " $* " in
{cases}  esac
  exit 0
fi
cat "$dir/listing.txt"
"#
    );

    write_executable(&dir.join("ss"), &script);
}

/// Installs a fake `ss` that always fails, for the fatal-enumeration path.
#[allow(dead_code)]
pub fn install_failing_ss(dir: &Path) {
    write_executable(
        &dir.join("ss"),
        "#!/bin/sh\necho 'ss: netlink query refused' >&2\nexit 1\n",
    );
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).expect("Failed to write fake ss");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake ss executable");
}

/// PATH value that resolves `ss` to the fake in `dir` first.
pub fn path_with(dir: &Path) -> String {
    format!(
        "{}:{}",
        dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

/// The `-K` invocations the fake `ss` has seen, one argv string per line.
#[allow(dead_code)]
pub fn kills_log(dir: &Path) -> Vec<String> {
    match fs::read_to_string(dir.join("kills.log")) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
