pub const CONNECT_KEY: &str = "payment/pagbank/connect_key";
pub const PUBLIC_KEY: &str = "payment/pagbank/public_key";
