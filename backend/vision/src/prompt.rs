//! Fixed extraction prompts, one per document kind.
//!
//! The prompts spell out the exact JSON structure the validator expects and
//! forbid surrounding prose. Models ignore the latter often enough that the
//! extractor still strips code fences.

use harvest_core::DocKind;

const RECIPE_PROMPT: &str = concat!(
    "Extract the recipe from this image. Return ONLY a JSON object with the ",
    "following structure: {\"title\": \"Recipe Title\", \"ingredients\": ",
    "[{\"item\": \"ingredient name\", \"amount\": \"amount with unit\", ",
    "\"notes\": \"any additional notes\"}], \"instructions\": [\"step 1\", ",
    "\"step 2\", ...]}. Do not include any other text or explanation."
);

const INVOICE_PROMPT: &str = concat!(
    "Extract the invoice data from this image and return it as a valid JSON ",
    "object. Follow this exact structure: { invoice_id: number; vendor: ",
    "string; date: string; totalAmount: number; confirmedAt: string; items: ",
    "Array<{ id: number; name: string; quantity: number; unit: string; ",
    "price: number; status: 'normal' | 'credited' | 'returned'; }> }. ",
    "Do not include any text before or after the JSON object."
);

/// The extraction prompt for a document kind.
pub fn extraction_prompt(kind: DocKind) -> &'static str {
    match kind {
        DocKind::Recipe => RECIPE_PROMPT,
        DocKind::Invoice => INVOICE_PROMPT,
    }
}

/// Token ceiling for the completion. Invoices run longer than recipes.
pub fn max_tokens(kind: DocKind) -> u32 {
    match kind {
        DocKind::Recipe => 1000,
        DocKind::Invoice => 2000,
    }
}
