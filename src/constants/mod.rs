pub const MEBIBYTE: usize = 1024 * 1024;

pub struct Env {
    pub ip: String,
    pub port: u16,
    pub workers: usize,
    pub upload_dir: String,
    pub public_path: String,
    pub max_file_size_mb: usize,
    pub verify_content: bool,
}

impl Env {
    fn new() -> Self {
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let workers = std::env::var("WORKERS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<usize>()
            .expect("WORKERS must be a valid usize integer");

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "/tmp/uploads".to_string());
        let public_path = std::env::var("PUBLIC_PATH").unwrap_or_else(|_| "/upload".to_string());

        let max_file_size_mb = std::env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<usize>()
            .expect("MAX_FILE_SIZE_MB must be a valid usize integer");
        let verify_content = std::env::var("VERIFY_CONTENT")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .expect("VERIFY_CONTENT must be either true or false");

        Env { ip, port, workers, upload_dir, public_path, max_file_size_mb, verify_content }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size_mb * MEBIBYTE
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
