/// Generate a per-exchange router method and its fan-out `_all` sibling.
///
/// The per-exchange method calls the one connector registered for the
/// exchange; the fan-out method calls every connector that has the
/// capability and merges their rows into a `FetchReport`.
///
/// `arg` must be `Copy` (a query reference or a date) because every fan-out
/// task receives it.
macro_rules! twdata_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident,
        fan_out: $all:ident,
        arg: $arg_ident:ident : $arg_ty:ty,
        returns: $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// `Unsupported` when no connector serves `exchange` or it lacks the
        /// capability; otherwise the connector's error, tagged with its name.
        #[tracing::instrument(target = "twdata::router", skip(self, $arg_ident))]
        pub async fn $name(
            &self,
            exchange: twdata_types::Exchange,
            $arg_ident: $arg_ty,
        ) -> Result<$ret, twdata_types::TwdataError> {
            let c = self.connector_for(exchange, $capability)?;
            let Some(p) = c.$accessor() else {
                return Err(Self::unsupported($capability, exchange));
            };
            Self::provider_call_with_timeout(
                c.name(),
                $capability,
                self.cfg.provider_timeout,
                p.$call_name($arg_ident),
            )
            .await
            .map_err(|e| $crate::core::tag_err(c.name(), e))
        }

        #[doc = concat!("Fan-out form of [`Self::", stringify!($name), "`] across every registered exchange.")]
        ///
        /// Rows are concatenated in connector registration order; failures of
        /// individual connectors are reported as warnings.
        ///
        /// # Errors
        /// `Unsupported` when no connector has the capability;
        /// `AllProvidersFailed` when every connector that has it fails.
        #[tracing::instrument(target = "twdata::router", skip(self, $arg_ident))]
        pub async fn $all(
            &self,
            $arg_ident: $arg_ty,
        ) -> Result<
            twdata_types::FetchReport<Vec<<$ret as $crate::router::util::IntoRows>::Row>>,
            twdata_types::TwdataError,
        > {
            let timeout = self.cfg.provider_timeout;
            let tasks = self.connectors.iter().map(|c| async move {
                let name = c.name();
                let Some(p) = c.$accessor() else {
                    return (name, None);
                };
                let res = Self::provider_call_with_timeout(
                    name,
                    $capability,
                    timeout,
                    p.$call_name($arg_ident),
                )
                .await;
                (name, Some(res.map($crate::router::util::IntoRows::into_rows)))
            });
            let outcomes = futures::future::join_all(tasks).await;
            $crate::router::util::collect_report($capability, outcomes)
        }
    };
}

pub(crate) use twdata_router_method;
