//! Application-wide constants: bucket names, endpoints, file names, and the
//! embedded support certificate.

use std::time::Duration;

/// Version stamp embedded in every report as `help_version`.
pub const HELP_VERSION: &str = "1.0";

/// Bucket receiving `--call-home` uploads.
pub const TELEMETRICS_BUCKET: &str = "scylla-telemetrics";

/// Bucket reserved for user-initiated uploads.
pub const USER_UPLOAD_BUCKET: &str = "scylladb-users-upload";

/// Base URL of the local Scylla management API.
pub const API_BASE: &str = "http://localhost:10000";

/// Remote endpoint publishing the latest released version.
pub const VERSION_URL: &str =
    "https://i6a5h9l1kl.execute-api.us-east-1.amazonaws.com/prod/check_version";

/// Candidate directories for the server configuration file, in lookup order.
pub const CONF_DIRS: &[&str] = &["conf", "/var/lib/scylla/conf/"];

/// Directory holding `cpuinfo` and `meminfo`.
pub const PROC_DIR: &str = "/proc/";

/// System log captured on pre-systemd Ubuntu releases.
pub const SYSLOG_PATH: &str = "/var/log/syslog";

/// Upstart server log captured on pre-systemd Ubuntu releases.
pub const UPSTART_LOG_PATH: &str = "/var/log/upstart/scylla-server.log";

/// Prefix of the per-run temporary workspace directory.
pub const WORKSPACE_PREFIX: &str = "scylla-help-";

/// Hidden sink file used when `--call-home` is set without `--out-file`.
pub const CALL_HOME_FILE_NAME: &str = "data.json";

/// Workspace file receiving the journalctl capture.
pub const JOURNAL_FILE_NAME: &str = "journal.txt";

/// Workspace file the embedded certificate is written to for openssl.
pub const KEY_FILE_NAME: &str = "scylla_public_key.pem";

/// Timeout applied to management-API and version-check requests.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout applied to each upload request.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Public certificate the support archive is encrypted against.
pub const SCYLLA_PUBLIC_KEY: &str = "-----BEGIN CERTIFICATE-----
MIIDQTCCAimgAwIBAgIJAMGyVpwnNZq3MA0GCSqGSIb3DQEBCwUAMDcxCzAJBgNV
BAYTAmlsMRUwEwYDVQQHDAxEZWZhdWx0IENpdHkxETAPBgNVBAoMCFNjeWxsYURC
MB4XDTE2MDYyNzA4MjE1NFoXDTE2MDcyNzA4MjE1NFowNzELMAkGA1UEBhMCaWwx
FTATBgNVBAcMDERlZmF1bHQgQ2l0eTERMA8GA1UECgwIU2N5bGxhREIwggEiMA0G
CSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQCS6iUznKqqttjk0GoZiDKiDKwsz2RJ
MFbteq37F92c3xr33TxYJWCPAplqpYruAcKhOj2fsV8vt9LZwCW7e85bHZKTy8pc
psu07Rf0r4ZQdEZm02TDDAlaxaOE339go0m7q7Z9CGbkK80El2uTS0nKdQAMJw44
Hbd3SMy4zYqbt/q2ZUWYqtMTxgoNZoCg/p6odIkMmA00fGlMdoxtlU3j0C5RxlKM
Vr3QOP8kuOW3v1gJGxZHp7vOidoTyX6ikRRHEjpSNPiuMUMGZwjX9ndsw0zfq5hg
pltcX6vgnh8/4YHxlNM24bR4LsYFRdbalBPoj4tCZmGMdLWBEMpuhs7tAgMBAAGj
UDBOMB0GA1UdDgQWBBSbKapPDRhYaOQy208zRRrGbYvilTAfBgNVHSMEGDAWgBSb
KapPDRhYaOQy208zRRrGbYvilTAMBgNVHRMEBTADAQH/MA0GCSqGSIb3DQEBCwUA
A4IBAQAT4nV44+Co5+sCufnflcGI5x1mSA8KpkFPq9yC0FSfyOEoJwEEXxzdrHfZ
LtaM9tsdKTWEC91+4TbVfbuux34JqQsfsq1M+0RxZuIHMl9uX8uefVsEAN6sAe86
kHrELoieZKPeeUyWsgABLNRi5/aX6xeEzPNjuRfjbRvEpilxwWSqWTbfhsugR8qd
N9UdL4vgUcXsuQeDJc8/Uw8pdDTBJEPIjBuoG8X6s+OHNWyrxXZe+GPlL5TxDGoG
zipmo08H26o1rL5Qv1l2cBcddh0NmoGarVxnZ+eRGRCWRtKdiCHjofoej2Fhucku
HywMyOPvn/L9RvyZ2aA8/gxK3qL/
-----END CERTIFICATE-----
";
