//! 工具参数的宽松类型转换
//!
//! 工具宿主传入的是未定型的 JSON 值，这里把每种转换失败都映射为明确的校验错误

use serde_json::Value;

use super::{SynthesisError, VoiceUuid};

/// 把音色标识转为字符串（字符串去空白，数字直接格式化）
pub fn coerce_voice_id(raw: &Value) -> Result<VoiceUuid, SynthesisError> {
    match raw {
        Value::String(s) => Ok(VoiceUuid::new(s)),
        Value::Number(n) => Ok(VoiceUuid::new(n.to_string())),
        _ => Err(SynthesisError::InvalidVoiceId),
    }
}

/// 把采样率转为整数
///
/// 接受 JSON 整数、小数部分为 0 的浮点数、以及内容为整数的字符串
pub fn coerce_sample_rate(raw: &Value) -> Result<i64, SynthesisError> {
    let not_integer = || SynthesisError::SampleRateNotInteger(raw.to_string());

    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // 超出 i64 的正整数不可能是受支持的采样率
            if n.as_u64().is_some() {
                return Ok(i64::MAX);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(not_integer()),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| not_integer()),
        _ => Err(not_integer()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::SampleRate;
    use serde_json::json;

    #[test]
    fn test_voice_id_from_string_and_number() {
        assert_eq!(coerce_voice_id(&json!(" abc-123 ")).unwrap().as_str(), "abc-123");
        assert_eq!(coerce_voice_id(&json!(55592656)).unwrap().as_str(), "55592656");
    }

    #[test]
    fn test_voice_id_rejects_non_scalar() {
        for raw in [json!(null), json!(true), json!([1]), json!({"id": 1})] {
            assert!(matches!(
                coerce_voice_id(&raw),
                Err(SynthesisError::InvalidVoiceId)
            ));
        }
    }

    #[test]
    fn test_sample_rate_coercion() {
        assert_eq!(coerce_sample_rate(&json!(44100)).unwrap(), 44100);
        assert_eq!(coerce_sample_rate(&json!(22050.0)).unwrap(), 22050);
        assert_eq!(coerce_sample_rate(&json!("16000")).unwrap(), 16000);
        assert_eq!(coerce_sample_rate(&json!(" 8000 ")).unwrap(), 8000);
        assert_eq!(coerce_sample_rate(&json!(-1)).unwrap(), -1);
    }

    #[test]
    fn test_sample_rate_rejects_non_integer() {
        for raw in [
            json!("fast"),
            json!("44100.0"),
            json!(44100.5),
            json!(null),
            json!([44100]),
        ] {
            let err = coerce_sample_rate(&raw).unwrap_err();
            assert!(matches!(err, SynthesisError::SampleRateNotInteger(_)));
        }
    }

    #[test]
    fn test_huge_integer_is_unsupported_not_non_integer() {
        let raw: Value = serde_json::from_str("18000000000000000000").unwrap();
        let hz = coerce_sample_rate(&raw).unwrap();
        let err = SampleRate::new(hz).unwrap_err();
        assert!(matches!(err, SynthesisError::UnsupportedSampleRate(_)));
        assert!(err.to_string().starts_with("Invalid sample rate. Must be one of"));
    }

    #[test]
    fn test_sample_rate_error_echoes_input() {
        let err = coerce_sample_rate(&json!("fast")).unwrap_err();
        assert_eq!(err.to_string(), "Sample rate must be an integer, got \"fast\".");
    }
}
