//! Application constants
//!
//! Centralized location for spreadsheet column headers, sheet ranges and the
//! numeric constants used by record normalization.

// Transactional sheet headers (bulk workbook and live feed share them)
pub const COL_SEQUENCE: &str = "ลำดับ";
pub const COL_SALE_DATE: &str = "วันที่ขาย";
pub const COL_CHANNEL: &str = "ช่องทางขาย";
pub const COL_PAYMENT: &str = "ชำระเงิน";
pub const COL_FACEBOOK_NAME: &str = "ชื่อ Facebook";
pub const COL_SALESPERSON: &str = "พนักงานขาย";
pub const COL_PRODUCT: &str = "สินค้า";
pub const COL_QUANTITY: &str = "จำนวน";
pub const COL_PRICE: &str = "ราคา";
pub const COL_RECIPIENT: &str = "ชื่อผู้รับ";
pub const COL_ADDRESS: &str = "ที่อยู่";
pub const COL_SUBDISTRICT: &str = "ตำบล";
pub const COL_DISTRICT: &str = "อำเภอ";
pub const COL_PROVINCE: &str = "จังหวัด";
pub const COL_POSTAL_CODE: &str = "รหัสไปรษณีย์";
pub const COL_PHONE: &str = "เบอร์โทร";

/// Headers the live transactional range must carry.
pub const REQUIRED_LIVE_HEADERS: [&str; 2] = [COL_SALE_DATE, COL_PHONE];

// Live feed sheet names and ranges
pub const REFERENCE_SHEET: &str = "ข้อมูลสินค้า";
pub const REALTIME_SALES_SHEET: &str = "SalesData_Realtime";
pub const ANALYSIS_LOG_SHEET: &str = "AnalysisLog";
pub const REFERENCE_RANGE: &str = "'ข้อมูลสินค้า'!A:D";
pub const REALTIME_SALES_RANGE: &str = "'SalesData_Realtime'!A:Z";
pub const ANALYSIS_LOG_RANGE: &str = "'AnalysisLog'!A1";

/// Day number of 1970-01-01 in the spreadsheet (1900 date system) calendar.
pub const SPREADSHEET_EPOCH_OFFSET_DAYS: f64 = 25_569.0;
pub const MILLIS_PER_DAY: f64 = 86_400.0 * 1000.0;

/// National calling code rewritten to a local leading zero.
pub const THAI_COUNTRY_CODE: &str = "66";

// Canonical key / display fallbacks
pub const NO_PHONE_SENTINEL: &str = "no-phone";
pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown";
pub const MISSING_ADDRESS_LABEL: &str = "ไม่มีข้อมูลที่อยู่";
pub const NOT_AVAILABLE: &str = "N/A";
pub const SALESPERSON_LABEL: &str = "พนักงาน";

// Source defaults
pub const DEFAULT_BULK_URL: &str = "https://raw.githubusercontent.com/PonuoM/search/main/sales_data.xlsx";
pub const GOOGLE_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
