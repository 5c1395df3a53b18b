use error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default = "PageRequest::default_page_number")]
    pub page_number: u32,
    #[serde(default = "PageRequest::default_page_size")]
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        PageRequest {
            page_number,
            page_size,
        }
    }

    pub fn default_page_number() -> u32 {
        1
    }

    pub fn default_page_size() -> u32 {
        let settings = get_settings!();
        settings.pagination.limit
    }

    pub fn check(&self, limit_max: u32) -> Result<()> {
        if self.page_number == 0 || self.page_size == 0 {
            return Err(Error::constraint(
                "pageSize and pageNumber must be positive integers",
            ));
        }

        if self.page_size > limit_max {
            return Err(Error::constraint(format!(
                "pageSize must not be greater than {}",
                limit_max
            )));
        }

        Ok(())
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1) * i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(
            PageRequest::default_page_number(),
            PageRequest::default_page_size(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: i64,
}

impl PageInfo {
    pub fn new(req: PageRequest, total_records: i64) -> Self {
        PageInfo {
            page_number: req.page_number,
            page_size: req.page_size,
            total_records,
        }
    }
}
