// Storage URI scheme; bucket names follow it directly
pub const STORAGE_SCHEME: &str = "s3://";

// Listing is a single page; matches the S3 ListObjectsV2 default MaxKeys
pub const LIST_PAGE_LIMIT: usize = 1000;

pub const CSV_EXTENSION: &str = ".csv";

// Filesystem default
pub const DEFAULT_FS_ROOT: &str = "./storage";

pub const DEFAULT_MINIO_ENDPOINT: &str = "http://localhost:9000";
pub const DEFAULT_MINIO_REGION: &str = "us-east-1";
pub const DEFAULT_OSS_ENDPOINT: &str = "https://oss-cn-hangzhou.aliyuncs.com";
