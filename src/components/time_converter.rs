use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hours::Hours;

#[derive(Properties, PartialEq)]
pub struct TimeConverterProps {
    /// The raw hours string taken from the URL, if any.
    #[prop_or_default]
    pub time: Option<AttrValue>,
}

/// The raw value of the hours input after the user edited it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursInput(pub String);

impl Reducible for Hours {
    type Action = HoursInput;

    // The typed value replaces the previous one outright, even when it does
    // not parse.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Hours::parse(&action.0))
    }
}

/// Converts the Alex hours typed into its input into real world hours.
///
/// The `min`, `max` and `step` attributes are only hints for the browser's
/// spinner; whatever the user types is stored as-is.
#[function_component(TimeConverter)]
pub fn time_converter(props: &TimeConverterProps) -> Html {
    let time = props.time.clone();
    let hours = use_reducer(move || Hours::from_param(time.as_deref()));

    let oninput = {
        let hours = hours.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            log::debug!("Alex hours changed to {value:?}");
            hours.dispatch(HoursInput(value));
        })
    };

    html! {
        <article>
            <div>
                <em>{"Alex"}</em>{" says"}
                <input
                    type="number"
                    {oninput}
                    value={hours.input_value()}
                    step="0.5"
                    min="0"
                    max="10"
                />
                {" hours"}
            </div>
            if let Some(converted) = hours.converted() {
                <div>{format!("Alex time converted to real world time is {converted} hours")}</div>
            }
        </article>
    }
}
