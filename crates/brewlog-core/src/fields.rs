//! Field assemblers: one fixed prompt, one primitive, one suggestion list
//!
//! Assemblers that consult history return `Result<Answer<T>, FieldError>`;
//! the rest cannot fail and return a bare [`Answer`].

use brewlog_config::SuggestionLimits;
use std::io::{BufRead, Write};

use crate::date::Date;
use crate::error::FieldError;
use crate::prompt::{Answer, ChoicePrompt, Console, DatePrompt, IntPrompt, TextPrompt};
use crate::records::{GrindAdjustment, V60FilterType};
use crate::storage::SuggestionSource;
use crate::suggest::SuggestionProvider;

pub type FieldResult<T> = Result<Answer<T>, FieldError>;

pub const GRIND_SETTING: (i64, i64) = (0, 50);
pub const BREWING_TIME_SEC: (i64, i64) = (10, 1800);
pub const COFFEE_GRAMS: (i64, i64) = (5, 100);
pub const WATER_GRAMS: (i64, i64) = (20, 2000);
pub const RATING: (i64, i64) = (1, 10);
pub const WEIGHT_ADJUSTMENT_GRAMS: (i64, i64) = (-20, 20);

pub struct FieldAssembler<'a, S: ?Sized> {
    provider: SuggestionProvider<'a, S>,
    limits: SuggestionLimits,
}

impl<'a, S: SuggestionSource + ?Sized> FieldAssembler<'a, S> {
    pub fn new(source: &'a S, limits: SuggestionLimits) -> Self {
        Self {
            provider: SuggestionProvider::new(source),
            limits,
        }
    }

    pub fn provider(&self) -> &SuggestionProvider<'a, S> {
        &self.provider
    }

    pub fn limits(&self) -> &SuggestionLimits {
        &self.limits
    }

    // ─────────────────────────────────────────────────────────────────────
    // History-backed fields
    // ─────────────────────────────────────────────────────────────────────

    pub fn brewing_method_name<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        optional: bool,
    ) -> FieldResult<String> {
        let suggestions = self
            .provider
            .brewing_methods(self.limits.brewing_methods)
            .map_err(|e| FieldError::new("brewing method", e))?;

        console.print("Enter brewing method name: ");
        Ok(TextPrompt::required()
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    pub fn grinder_name<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        optional: bool,
    ) -> FieldResult<String> {
        let suggestions = self
            .provider
            .grinders(self.limits.grinders)
            .map_err(|e| FieldError::new("coffee grinder", e))?;

        console.print("Enter coffee grinder name: ");
        Ok(TextPrompt::required()
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    pub fn coffee_name<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        optional: bool,
    ) -> FieldResult<String> {
        self.coffee_name_with_limit(console, optional, self.limits.coffee_names)
    }

    pub fn coffee_name_with_limit<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        optional: bool,
        limit: usize,
    ) -> FieldResult<String> {
        let suggestions = self
            .provider
            .coffee_names(limit)
            .map_err(|e| FieldError::new("coffee name", e))?;

        console.print("Enter coffee name: ");
        Ok(TextPrompt::required()
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    /// Roaster of `coffee_name`, suggesting roasters already paired with it
    pub fn roaster<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        coffee_name: &str,
        optional: bool,
    ) -> FieldResult<String> {
        let suggestions = self
            .provider
            .roasters(coffee_name, self.limits.roasters)
            .map_err(|e| FieldError::new("roaster", e))?;

        console.print("Enter roaster/producer name: ");
        Ok(TextPrompt::required()
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    /// Optional roast date, suggesting the one on the last bag of this coffee
    pub fn roast_date<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        coffee_name: &str,
    ) -> FieldResult<Date> {
        let last = self
            .provider
            .last_roast_date(coffee_name)
            .map_err(|e| FieldError::new("roast date", e))?;

        Ok(DatePrompt::new("Enter roast ?: ")
            .optional()
            .suggestions(last.into_iter().collect())
            .ask(console))
    }

    pub fn coffee_weight<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        method_name: &str,
        grinder_name: &str,
        optional: bool,
    ) -> FieldResult<i64> {
        let suggestions = self
            .provider
            .coffee_weights(method_name, grinder_name, self.limits.weights)
            .map_err(|e| FieldError::new("coffee weight", e))?;

        console.print("Enter the coffee weight used in grams: ");
        let (min, max) = COFFEE_GRAMS;
        Ok(IntPrompt::new(min, max)
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    pub fn water_weight<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        method_name: &str,
        grinder_name: &str,
        optional: bool,
    ) -> FieldResult<i64> {
        let suggestions = self
            .provider
            .water_weights(method_name, grinder_name, self.limits.weights)
            .map_err(|e| FieldError::new("water weight", e))?;

        console.print("Enter the water weight used in grams: ");
        let (min, max) = WATER_GRAMS;
        Ok(IntPrompt::new(min, max)
            .optional_if(optional)
            .suggestions(suggestions)
            .ask(console))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Plain fields
    // ─────────────────────────────────────────────────────────────────────

    /// Required event date suggesting today and yesterday, e.g. `brewing`
    pub fn event_date<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        message: &str,
    ) -> Answer<Date> {
        let recent = console.settings().recent_days();
        DatePrompt::new(message).suggestions(recent).ask(console)
    }

    pub fn grind_setting<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<i64> {
        // assumes every grinder's scale fits in 0..=50
        console.print("Enter grind setting: ");
        let (min, max) = GRIND_SETTING;
        IntPrompt::new(min, max).ask(console)
    }

    pub fn total_brewing_time<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Answer<i64> {
        console.print("Enter the total brewing time in seconds: ");
        let (min, max) = BREWING_TIME_SEC;
        IntPrompt::new(min, max).ask(console)
    }

    pub fn rating<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<i64> {
        console.print("Enter your rating for this brew (1 <= x <= 10): ");
        let (min, max) = RATING;
        IntPrompt::new(min, max).optional().ask(console)
    }

    pub fn grind_adjustment<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Answer<GrindAdjustment> {
        console.print("Enter recommended grind setting adjustment: ");
        ChoicePrompt::optional().ask(console)
    }

    pub fn coffee_weight_adjustment<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Answer<i64> {
        console.print("Enter recommended coffee weight adjustment in grams (-20 <= x <= 20): ");
        let (min, max) = WEIGHT_ADJUSTMENT_GRAMS;
        IntPrompt::new(min, max).optional().ask(console)
    }

    pub fn v60_filter_type<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Answer<V60FilterType> {
        console.print("Enter v60 filter type: ");
        ChoicePrompt::optional().ask(console)
    }

    /// Free text, e.g. `note_type = "espresso"` asks for "some espresso notes"
    pub fn notes<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        optional: bool,
        note_type: &str,
    ) -> Answer<String> {
        console.print(format!("Enter some {note_type} notes: "));
        TextPrompt::required().optional_if(optional).ask(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::test_support::{scripted, transcript, MemorySuggestionSource};
    use std::error::Error as _;

    fn history() -> MemorySuggestionSource {
        let mut source = MemorySuggestionSource::new();
        source.brewed_coffees = vec!["Guji".into(), "Huila".into()];
        source.purchased_coffees = vec!["Karogoto".into()];
        source
            .roasters
            .insert("Guji".into(), vec!["Tim Wendelboe".into(), "Friedhats".into()]);
        source.brewing_methods = vec!["V60".into(), "Espresso".into()];
        source.grinders = vec!["Comandante C40".into()];
        source
            .coffee_weights
            .insert(("V60".into(), "Comandante C40".into()), vec![15, 18]);
        source.roast_dates.insert("Guji".into(), Date::new(2024, 2, 20));
        source
    }

    #[test]
    fn coffee_name_offers_blend() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("3\n");

        let answer = fields.coffee_name(&mut console, false).unwrap();
        assert_eq!(answer, Answer::Given("Karogoto".into()));
        assert!(transcript(&console).starts_with("Enter coffee name: \nSelect one"));
    }

    #[test]
    fn roaster_filtered_by_coffee() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("2\n");

        let answer = fields.roaster(&mut console, "Guji", false).unwrap();
        assert_eq!(answer, Answer::Given("Friedhats".into()));
        assert!(source
            .calls()
            .contains(&("RoastersOf(\"Guji\")".to_string(), 5)));
    }

    #[test]
    fn roaster_without_history_is_free_entry() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("\nSquare Mile\n");

        let answer = fields.roaster(&mut console, "New coffee", false).unwrap();
        assert_eq!(answer, Answer::Given("Square Mile".into()));
        assert!(transcript(&console).contains("A value is required. Please try again: "));
    }

    #[test]
    fn limits_come_from_config() {
        let source = history();
        let limits = SuggestionLimits {
            grinders: 2,
            brewing_methods: 4,
            ..SuggestionLimits::default()
        };
        let fields = FieldAssembler::new(&source, limits);
        let mut console = scripted("1\n1\n");

        fields.grinder_name(&mut console, false).unwrap().given().unwrap();
        fields.brewing_method_name(&mut console, false).unwrap().given().unwrap();
        assert_eq!(
            source.calls(),
            vec![("Grinders".to_string(), 2), ("BrewingMethods".to_string(), 4)]
        );
    }

    #[test]
    fn coffee_weight_uses_method_and_grinder() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("2\n");

        let answer = fields
            .coffee_weight(&mut console, "V60", "Comandante C40", false)
            .unwrap();
        assert_eq!(answer, Answer::Given(18));
    }

    #[test]
    fn water_weight_bounds() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("19\n2001\n2000\n");

        let answer = fields.water_weight(&mut console, "V60", "Ode", false).unwrap();
        assert_eq!(answer, Answer::Given(2000));
    }

    #[test]
    fn roast_date_suggests_last_bag() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());

        let mut console = scripted("1\n");
        let answer = fields.roast_date(&mut console, "Guji").unwrap();
        assert_eq!(answer, Answer::Given(Date::new(2024, 2, 20)));

        let mut console = scripted("\n");
        let answer = fields.roast_date(&mut console, "Huila").unwrap();
        assert_eq!(answer, Answer::Given(Date::ZERO));
        assert!(transcript(&console).starts_with("Enter roast year: "));
    }

    #[test]
    fn lookup_failure_is_labelled() {
        let source = MemorySuggestionSource::failing();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("Guji\n");

        let err = fields.coffee_name(&mut console, false).unwrap_err();
        assert_eq!(err.to_string(), "failed to get coffee name suggestions");
        assert!(matches!(err.source, StoreError::Backend(_)));
        assert!(err.source().is_some());
        // nothing was asked
        assert_eq!(transcript(&console), "");
    }

    #[test]
    fn plain_fields_enforce_bounds() {
        let source = MemorySuggestionSource::new();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());

        let mut console = scripted("51\n-1\n12\n");
        assert_eq!(fields.grind_setting(&mut console), Answer::Given(12));

        let mut console = scripted("9\n1801\n180\n");
        assert_eq!(fields.total_brewing_time(&mut console), Answer::Given(180));

        let mut console = scripted("11\n\n");
        assert_eq!(fields.rating(&mut console), Answer::Given(0));

        let mut console = scripted("-21\n-3\n");
        assert_eq!(fields.coffee_weight_adjustment(&mut console), Answer::Given(-3));
    }

    #[test]
    fn enumerated_fields() {
        let source = MemorySuggestionSource::new();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());

        let mut console = scripted("2\n");
        assert_eq!(fields.v60_filter_type(&mut console), Answer::Given(V60FilterType::Jp));

        let mut console = scripted("\n");
        assert_eq!(
            fields.grind_adjustment(&mut console),
            Answer::Given(GrindAdjustment::Unset)
        );
    }

    #[test]
    fn event_date_offers_today_and_yesterday() {
        let source = MemorySuggestionSource::new();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("2\n");

        let answer = fields.event_date(&mut console, "Enter brewing ?: ");
        assert_eq!(answer, Answer::Given(Date::new(2024, 3, 14)));
        assert!(transcript(&console).contains("1. 2024-03-15\n2. 2024-03-14\n"));
    }

    #[test]
    fn notes_prompt_names_the_kind() {
        let source = MemorySuggestionSource::new();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("Juicy, some astringency.\n");

        let answer = fields.notes(&mut console, true, "espresso");
        assert_eq!(answer, Answer::Given("Juicy, some astringency.".into()));
        assert_eq!(transcript(&console), "Enter some espresso notes: ");
    }

    #[test]
    fn quit_passes_through() {
        let source = history();
        let fields = FieldAssembler::new(&source, SuggestionLimits::default());
        let mut console = scripted("#\n");
        assert!(fields.brewing_method_name(&mut console, false).unwrap().is_quit());
    }
}
