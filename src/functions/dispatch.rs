//! Call a text function by name with string arguments.

use serde_json::{json, Value};
use std::error::Error;

/// Every function [`dispatch`] knows, with its argument list.
pub const FUNCTIONS: [(&str, &str); 22] = [
    ("address", "<address>"),
    ("address_port", "<address> <port>"),
    ("bits", "<prefix>"),
    ("cidr", "<address[/mask]>"),
    ("contain", "<container> <address|prefix>"),
    ("equal_address", "<address> <address>"),
    ("equal_prefix", "<prefix> <prefix>"),
    ("expand6", "<address|prefix>"),
    ("generate6_eui64", "<prefix> <mac>"),
    ("generate6_opaque", "<prefix> <net_iface> <network_id|null> <dad_counter|null> <secret_key>"),
    ("is4", "<address>"),
    ("is6", "<address>"),
    ("is_private", "<address|prefix>"),
    ("is_private_rfc1918", "<address|prefix>"),
    ("is_private_rfc4193", "<address|prefix>"),
    ("is_private_rfc6598", "<address|prefix>"),
    ("is_public", "<address|prefix>"),
    ("prefix", "<prefix>"),
    ("ptr", "<address>"),
    ("summarize", "<address|prefix>..."),
    ("translate_4to6", "<address> <prefix>"),
    ("translate_6to4", "<address|prefix>"),
];

/// Argument placeholder for an absent optional value.
const NULL_ARG: &str = "null";

fn expect_args<'a>(
    name: &str,
    args: &'a [String],
    n: usize,
) -> Result<&'a [String], Box<dyn Error>> {
    if args.len() != n {
        return Err(format!("{name} takes {n} argument(s), got {}", args.len()).into());
    }
    Ok(args)
}

fn optional(arg: &str) -> Option<&str> {
    (arg != NULL_ARG).then_some(arg)
}

fn parse_int(what: &str, arg: &str) -> Result<i64, Box<dyn Error>> {
    arg.trim()
        .parse()
        .map_err(|e| format!("Invalid {what}: {arg:?} is not an integer: {e}").into())
}

/// Run function `name` and return its result as JSON.
///
/// # Examples
/// ```
/// use ipnetwork_calc::functions::dispatch;
/// let out = dispatch("prefix", &["192.0.2.77/24".to_string()]).unwrap();
/// assert_eq!(out, serde_json::json!("192.0.2.0/24"));
/// ```
pub fn dispatch(name: &str, args: &[String]) -> Result<Value, Box<dyn Error>> {
    log::debug!("dispatch({name}, {args:?})");
    let value = match name {
        "address" => json!(super::address(&expect_args(name, args, 1)?[0])?),
        "address_port" => {
            let args = expect_args(name, args, 2)?;
            json!(super::address_port(&args[0], parse_int("port", &args[1])?)?)
        }
        "bits" => json!(super::bits(&expect_args(name, args, 1)?[0])?),
        "cidr" => json!(super::cidr(&expect_args(name, args, 1)?[0])?),
        "contain" => {
            let args = expect_args(name, args, 2)?;
            json!(super::contain(&args[0], &args[1])?)
        }
        "equal_address" => {
            let args = expect_args(name, args, 2)?;
            json!(super::equal_address(&args[0], &args[1])?)
        }
        "equal_prefix" => {
            let args = expect_args(name, args, 2)?;
            json!(super::equal_prefix(&args[0], &args[1])?)
        }
        "expand6" => json!(super::expand6(&expect_args(name, args, 1)?[0])?),
        "generate6_eui64" => {
            let args = expect_args(name, args, 2)?;
            json!(super::generate6_eui64(&args[0], &args[1])?)
        }
        "generate6_opaque" => {
            let args = expect_args(name, args, 5)?;
            let dad_counter = match optional(&args[3]) {
                Some(arg) => Some(parse_int("DAD_Counter", arg)?),
                None => None,
            };
            json!(super::generate6_opaque(
                &args[0],
                &args[1],
                optional(&args[2]),
                dad_counter,
                &args[4],
            )?)
        }
        "is4" => json!(super::is4(&expect_args(name, args, 1)?[0])?),
        "is6" => json!(super::is6(&expect_args(name, args, 1)?[0])?),
        "is_private" => json!(super::is_private(&expect_args(name, args, 1)?[0])?),
        "is_private_rfc1918" => json!(super::is_private_rfc1918(&expect_args(name, args, 1)?[0])?),
        "is_private_rfc4193" => json!(super::is_private_rfc4193(&expect_args(name, args, 1)?[0])?),
        "is_private_rfc6598" => json!(super::is_private_rfc6598(&expect_args(name, args, 1)?[0])?),
        "is_public" => json!(super::is_public(&expect_args(name, args, 1)?[0])?),
        "prefix" => json!(super::prefix(&expect_args(name, args, 1)?[0])?),
        "ptr" => json!(super::ptr(&expect_args(name, args, 1)?[0])?),
        "summarize" => json!(super::summarize(args)?),
        "translate_4to6" => {
            let args = expect_args(name, args, 2)?;
            json!(super::translate_4to6(&args[0], &args[1])?)
        }
        "translate_6to4" => json!(super::translate_6to4(&expect_args(name, args, 1)?[0])?),
        _ => return Err(format!("Unknown function: {name}").into()),
    };
    log::trace!("dispatch({name}) = {value}");
    Ok(value)
}
