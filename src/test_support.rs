use crate::campaign::CampaignRequest;
use crate::error::{CampaignError, Result};
use crate::model::ModelInvoker;
use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::collections::VecDeque;

pub(crate) fn sample_request() -> CampaignRequest {
    CampaignRequest::new(
        "Acme Bakery",
        "Bakery",
        "Austin",
        "Increase foot traffic",
        "Local families",
        30,
        1000.0,
    )
    .unwrap()
}

/// 2024-03-15 09:30:05
pub(crate) fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 30, 5)
        .unwrap()
}

/// Model double that replays canned responses and records prompts.
#[derive(Default)]
pub(crate) struct ScriptedInvoker {
    responses: RefCell<VecDeque<Result<String>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInvoker {
    pub(crate) fn replying(text: &str) -> Self {
        let invoker = Self::default();
        invoker.push(Ok(text.to_string()));
        invoker
    }

    pub(crate) fn failing(message: &str) -> Self {
        let invoker = Self::default();
        invoker.push(Err(CampaignError::ModelError(message.to_string())));
        invoker
    }

    pub(crate) fn push(&self, response: Result<String>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ModelInvoker for ScriptedInvoker {
    fn invoke(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected model call with prompt:\n{}", prompt))
    }
}
